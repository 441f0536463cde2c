pub mod cli;
pub mod error;
pub mod github;
pub mod model;
pub mod report;
pub mod stats;
pub mod util;
