use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const TOP_REPO_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryContribution {
    pub name: String,
    pub is_private: bool,
    pub commit_count: u32,
}

/// Scalar totals pre-summed by the GraphQL API. The aggregator carries these
/// through unchanged; it never re-derives them from daily counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarTotals {
    pub total_contributions: u32,
    pub commits: u32,
    pub issues: u32,
    pub pull_requests: u32,
    pub reviews: u32,
    pub repositories_contributed: u32,
    pub public_contributions: u32,
    pub private_contributions: u32,
    pub new_repositories: u32,
}

/// Aggregated result for one year. Constructed once per (username, year)
/// query and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct YearStats {
    pub year: i32,
    pub total_contributions: u32,
    pub public_contributions: u32,
    pub private_contributions: u32,
    pub commits: u32,
    pub issues: u32,
    pub pull_requests: u32,
    pub reviews: u32,
    pub repositories_contributed: u32,
    pub new_repositories: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub top_repositories: Vec<RepositoryContribution>,
    // The raw calendar never appears in machine-readable output
    #[serde(skip_serializing)]
    pub daily_contributions: Vec<ContributionDay>,
}
