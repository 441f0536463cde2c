use crate::model::YearStats;
use crate::report::graph::month_graph;
use crate::util::{group_digits, month_name, short_repo_name};

const METRIC_WIDTH: usize = 18;
const RANKED_ROWS: usize = 5;

type MetricValue = fn(&YearStats) -> String;

const METRICS: [(&str, MetricValue); 9] = [
    ("Total", |s| group_digits(u64::from(s.total_contributions))),
    ("Public", |s| group_digits(u64::from(s.public_contributions))),
    ("Private", |s| group_digits(u64::from(s.private_contributions))),
    ("Commits", |s| group_digits(u64::from(s.commits))),
    ("Pull Requests", |s| group_digits(u64::from(s.pull_requests))),
    ("Issues", |s| group_digits(u64::from(s.issues))),
    ("Reviews", |s| group_digits(u64::from(s.reviews))),
    ("New Repositories", |s| group_digits(u64::from(s.new_repositories))),
    ("Longest Streak", |s| format!("{} days", s.max_streak)),
];

/// Side-by-side report for two or more years. The caller sorts and
/// deduplicates the list before rendering.
pub fn render_comparison(stats_list: &[YearStats], username: &str) -> String {
    let mut out = String::new();

    let years: Vec<String> = stats_list.iter().map(|s| s.year.to_string()).collect();
    out.push_str("Year-over-Year Comparison\n");
    out.push_str(&format!("@{} - {}\n", username, years.join(" vs ")));
    out.push_str(&format!("{}\n\n", "─".repeat(50)));

    summary_table(&mut out, stats_list, &years);
    monthly_table(&mut out, stats_list);
    ranked_table(&mut out, stats_list, &years);

    out
}

fn summary_table(out: &mut String, stats_list: &[YearStats], years: &[String]) {
    // One column per year, wide enough for its header and every value
    let col_width = METRICS
        .iter()
        .flat_map(|(_, value)| stats_list.iter().map(value))
        .map(|v| v.chars().count())
        .chain(years.iter().map(|y| y.chars().count()))
        .max()
        .unwrap_or(0);

    out.push_str(&format!("{:<METRIC_WIDTH$}", "Metric"));
    for year in years {
        out.push_str(&format!("  {year:>col_width$}"));
    }
    out.push('\n');

    for (label, value) in METRICS {
        out.push_str(&format!("{label:<METRIC_WIDTH$}"));
        for stats in stats_list {
            out.push_str(&format!("  {:>col_width$}", value(stats)));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn monthly_table(out: &mut String, stats_list: &[YearStats]) {
    out.push_str("Monthly Activity\n");

    let cells: Vec<Vec<String>> = (1..=12u32)
        .map(|month| {
            stats_list
                .iter()
                .map(|stats| {
                    let (graph, total) = month_graph(&stats.daily_contributions, month);
                    format!("{graph} ({total})")
                })
                .collect()
        })
        .collect();

    let col_width = cell_width(&cells);
    for (row, month) in cells.iter().zip(1..=12u32) {
        out.push_str(month_name(month));
        for cell in row {
            out.push_str(&format!("  {cell:<col_width$}"));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn ranked_table(out: &mut String, stats_list: &[YearStats], years: &[String]) {
    out.push_str("Top Repositories\n");

    let cells: Vec<Vec<String>> = (0..RANKED_ROWS)
        .map(|rank| {
            stats_list
                .iter()
                .map(|stats| {
                    stats
                        .top_repositories
                        .get(rank)
                        .map(|r| format!("{} ({})", short_repo_name(&r.name), r.commit_count))
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect()
        })
        .collect();

    let col_width = cell_width(&cells).max(years.iter().map(|y| y.chars().count()).max().unwrap_or(0));

    out.push_str("  ");
    for year in years {
        out.push_str(&format!("  {year:<col_width$}"));
    }
    out.push('\n');

    for (rank, row) in cells.iter().enumerate() {
        out.push_str(&format!("#{}", rank + 1));
        for cell in row {
            out.push_str(&format!("  {cell:<col_width$}"));
        }
        out.push('\n');
    }
}

fn cell_width(cells: &[Vec<String>]) -> usize {
    cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
}
