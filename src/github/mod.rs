pub mod auth;
pub mod client;

pub use auth::{authenticated_username, discover_token};
pub use client::{year_bounds, GithubClient, YearActivity};
