use crate::model::YearStats;
use crate::report::graph::month_graph;
use crate::util::{group_digits, month_name};
use chrono::{Datelike, NaiveDate};

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 10;

/// Single-year textual report. Pure: `today` decides which empty future
/// months are suppressed, so callers pass it in rather than reading a clock.
pub fn render_single(stats: &YearStats, username: &str, today: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("GitHub Metrics Report\n");
    out.push_str(&format!("@{} - {}\n", username, stats.year));
    out.push_str(&format!("{}\n\n", "─".repeat(50)));

    metric_row(&mut out, "Total Contributions", stats.total_contributions);
    metric_row(&mut out, "  Public", stats.public_contributions);
    metric_row(&mut out, "  Private", stats.private_contributions);
    out.push('\n');

    metric_row(&mut out, "Commits", stats.commits);
    metric_row(&mut out, "Pull Requests", stats.pull_requests);
    metric_row(&mut out, "Issues", stats.issues);
    metric_row(&mut out, "Code Reviews", stats.reviews);
    metric_row(&mut out, "New Repositories", stats.new_repositories);
    out.push('\n');

    metric_row(&mut out, "Repositories", stats.repositories_contributed);
    streak_row(&mut out, "Current Streak", stats.current_streak);
    streak_row(&mut out, "Longest Streak", stats.max_streak);

    out.push_str("\nMonthly Activity\n");
    for month in 1..=12u32 {
        let (graph, total) = month_graph(&stats.daily_contributions, month);
        let future = (stats.year, month) > (today.year(), today.month());
        if future && total == 0 {
            continue;
        }
        out.push_str(&format!("{} {} ({})\n", month_name(month), graph, total));
    }

    if !stats.top_repositories.is_empty() {
        out.push_str("\nTop Repositories\n");
        let name_width = stats
            .top_repositories
            .iter()
            .take(5)
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0);

        for repo in stats.top_repositories.iter().take(5) {
            let visibility = if repo.is_private { "private" } else { "public" };
            out.push_str(&format!(
                "{:<name_width$}  {:>6}  {}\n",
                repo.name, repo.commit_count, visibility
            ));
        }
    }

    out
}

fn metric_row(out: &mut String, label: &str, value: u32) {
    out.push_str(&format!(
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}\n",
        label,
        group_digits(u64::from(value))
    ));
}

fn streak_row(out: &mut String, label: &str, days: u32) {
    out.push_str(&format!(
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}\n",
        label,
        format!("{days} days")
    ));
}
