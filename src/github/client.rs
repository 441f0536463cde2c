use crate::error::{GhmError, Result};
use crate::model::{CalendarTotals, ContributionDay, RepositoryContribution};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use std::time::Duration;

const GRAPHQL_URL: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = concat!("ghm/", env!("CARGO_PKG_VERSION"));

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $username) {
        contributionsCollection(from: $from, to: $to) {
            totalCommitContributions
            totalIssueContributions
            totalPullRequestContributions
            totalPullRequestReviewContributions
            totalRepositoriesWithContributedCommits
            totalRepositoryContributions
            restrictedContributionsCount
            contributionCalendar {
                totalContributions
                weeks {
                    contributionDays {
                        date
                        contributionCount
                    }
                }
            }
            commitContributionsByRepository(maxRepositories: 100) {
                repository {
                    nameWithOwner
                    isPrivate
                }
                contributions {
                    totalCount
                }
            }
        }
    }
}
"#;

/// One year of raw activity as fetched from the API, typed at the transport
/// boundary so the aggregation core never touches loose JSON.
#[derive(Debug, Clone)]
pub struct YearActivity {
    pub totals: CalendarTotals,
    pub daily_contributions: Vec<ContributionDay>,
    pub repo_contributions: Vec<RepositoryContribution>,
}

pub struct GithubClient {
    agent: ureq::Agent,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self { agent, token }
    }

    fn query(&self, variables: serde_json::Value) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": variables,
        });

        let response = self
            .agent
            .post(GRAPHQL_URL)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("User-Agent", USER_AGENT)
            .send_json(payload)?;

        let body: serde_json::Value = response
            .into_json()
            .map_err(|e| GhmError::MalformedPayload(format!("invalid JSON response: {e}")))?;

        if let Some(errors) = body.get("errors") {
            return Err(GhmError::Api(errors.to_string()));
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| GhmError::MalformedPayload("response has no data field".to_string()))
    }

    /// Fetch totals, calendar, and repository breakdown for one year.
    pub fn fetch_year_activity(&self, username: &str, year: i32) -> Result<YearActivity> {
        let (from, to) = year_bounds(year, Utc::now());
        let data = self.query(serde_json::json!({
            "username": username,
            "from": from,
            "to": to,
        }))?;

        let parsed: QueryData = serde_json::from_value(data)
            .map_err(|e| GhmError::MalformedPayload(e.to_string()))?;

        let user = parsed
            .user
            .ok_or_else(|| GhmError::UserNotFound(username.to_string()))?;

        Ok(user.contributions_collection.into_activity())
    }
}

/// Date bounds for a year's query. The upper bound is clamped to the current
/// instant for the current year, so the trailing streak reflects "as of
/// now"; past years keep their year-end bound.
pub fn year_bounds(year: i32, now: DateTime<Utc>) -> (String, String) {
    let from = format!("{year}-01-01T00:00:00Z");
    let to = if year == now.year() {
        now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        format!("{year}-12-31T23:59:59Z")
    };
    (from, to)
}

#[derive(Deserialize)]
struct QueryData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    total_commit_contributions: u32,
    total_issue_contributions: u32,
    total_pull_request_contributions: u32,
    total_pull_request_review_contributions: u32,
    total_repositories_with_contributed_commits: u32,
    #[serde(default)]
    total_repository_contributions: u32,
    #[serde(default)]
    restricted_contributions_count: u32,
    contribution_calendar: ContributionCalendar,
    #[serde(default)]
    commit_contributions_by_repository: Vec<RepoContributionNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionCalendar {
    total_contributions: u32,
    weeks: Vec<CalendarWeek>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarWeek {
    contribution_days: Vec<CalendarDay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    date: NaiveDate,
    contribution_count: u32,
}

#[derive(Deserialize)]
struct RepoContributionNode {
    repository: RepoNode,
    contributions: ContributionCount,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoNode {
    name_with_owner: String,
    is_private: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionCount {
    total_count: u32,
}

impl ContributionsCollection {
    fn into_activity(self) -> YearActivity {
        let total = self.contribution_calendar.total_contributions;
        let private = self.restricted_contributions_count;

        let totals = CalendarTotals {
            total_contributions: total,
            commits: self.total_commit_contributions,
            issues: self.total_issue_contributions,
            pull_requests: self.total_pull_request_contributions,
            reviews: self.total_pull_request_review_contributions,
            repositories_contributed: self.total_repositories_with_contributed_commits,
            public_contributions: total.saturating_sub(private),
            private_contributions: private,
            new_repositories: self.total_repository_contributions,
        };

        // Weeks arrive in chronological order; flattening preserves it
        let daily_contributions = self
            .contribution_calendar
            .weeks
            .into_iter()
            .flat_map(|w| w.contribution_days)
            .map(|d| ContributionDay {
                date: d.date,
                count: d.contribution_count,
            })
            .collect();

        let repo_contributions = self
            .commit_contributions_by_repository
            .into_iter()
            .map(|r| RepositoryContribution {
                name: r.repository.name_with_owner,
                is_private: r.repository.is_private,
                commit_count: r.contributions.total_count,
            })
            .collect();

        YearActivity {
            totals,
            daily_contributions,
            repo_contributions,
        }
    }
}
