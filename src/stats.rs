use crate::model::{CalendarTotals, ContributionDay, RepositoryContribution, YearStats, TOP_REPO_LIMIT};

/// Convert a chronological contribution calendar plus a repository list into
/// the aggregated stats for one year. Totals come pre-summed from the API;
/// only streaks and ranking are computed here.
pub fn aggregate(
    year: i32,
    totals: CalendarTotals,
    daily_contributions: Vec<ContributionDay>,
    repo_contributions: Vec<RepositoryContribution>,
) -> YearStats {
    YearStats {
        year,
        total_contributions: totals.total_contributions,
        public_contributions: totals.public_contributions,
        private_contributions: totals.private_contributions,
        commits: totals.commits,
        issues: totals.issues,
        pull_requests: totals.pull_requests,
        reviews: totals.reviews,
        repositories_contributed: totals.repositories_contributed,
        new_repositories: totals.new_repositories,
        current_streak: current_streak(&daily_contributions),
        max_streak: max_streak(&daily_contributions),
        top_repositories: rank_repositories(repo_contributions),
        daily_contributions,
    }
}

/// Longest run of consecutive contributing days anywhere in the range.
pub fn max_streak(days: &[ContributionDay]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for day in days {
        if day.count > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Consecutive contributing days ending at the last day in the range. This
/// is "as of now" only when the caller clamped the range end to the present.
pub fn current_streak(days: &[ContributionDay]) -> u32 {
    days.iter().rev().take_while(|d| d.count > 0).count() as u32
}

/// Top repositories by commit count, descending. The sort is stable: equal
/// counts keep their original API order.
pub fn rank_repositories(mut repos: Vec<RepositoryContribution>) -> Vec<RepositoryContribution> {
    repos.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    repos.truncate(TOP_REPO_LIMIT);
    repos
}
