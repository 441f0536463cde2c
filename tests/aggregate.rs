use chrono::NaiveDate;
use ghm::model::{CalendarTotals, ContributionDay, RepositoryContribution};
use ghm::stats::{aggregate, current_streak, max_streak, rank_repositories};
use pretty_assertions::assert_eq;

fn days(counts: &[u32]) -> Vec<ContributionDay> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| ContributionDay {
            date: start + chrono::Days::new(i as u64),
            count,
        })
        .collect()
}

fn repo(name: &str, commits: u32) -> RepositoryContribution {
    RepositoryContribution {
        name: name.to_string(),
        is_private: false,
        commit_count: commits,
    }
}

#[test]
fn max_streak_is_longest_run_of_positive_days() {
    assert_eq!(max_streak(&days(&[1, 0, 2, 3, 0, 0, 5])), 2);
    assert_eq!(max_streak(&days(&[1, 1, 1])), 3);
    assert_eq!(max_streak(&days(&[0, 0, 0])), 0);
}

#[test]
fn current_streak_counts_trailing_positive_days() {
    assert_eq!(current_streak(&days(&[1, 0, 2, 3])), 2);
    assert_eq!(current_streak(&days(&[0, 0, 0])), 0);
    assert_eq!(current_streak(&days(&[2, 1, 4])), 3);
    assert_eq!(current_streak(&days(&[1, 1, 0])), 0);
}

#[test]
fn empty_calendar_yields_zero_streaks() {
    assert_eq!(max_streak(&[]), 0);
    assert_eq!(current_streak(&[]), 0);
}

#[test]
fn current_streak_never_exceeds_max_streak() {
    let sequences: [&[u32]; 6] = [
        &[1, 0, 2, 3, 0, 0, 5],
        &[5, 5, 5, 5],
        &[0],
        &[],
        &[1, 1, 0, 1],
        &[0, 7, 0, 1, 1, 1],
    ];
    for seq in sequences {
        let d = days(seq);
        assert!(current_streak(&d) <= max_streak(&d), "failed for {seq:?}");
    }
}

#[test]
fn ranking_is_stable_and_capped_at_ten() {
    let mut input = Vec::new();
    for i in 0..12 {
        // Pairs of equal commit counts to exercise tie handling
        input.push(repo(&format!("owner/r{i}"), 100 - (i / 2) as u32));
    }
    let ranked = rank_repositories(input);
    assert_eq!(ranked.len(), 10);
    // Equal counts keep original relative order
    assert_eq!(ranked[0].name, "owner/r0");
    assert_eq!(ranked[1].name, "owner/r1");
    assert_eq!(ranked[2].name, "owner/r2");
}

#[test]
fn ranking_sorts_descending_by_commit_count() {
    let ranked = rank_repositories(vec![repo("a/low", 2), repo("a/high", 9), repo("a/mid", 5)]);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a/high", "a/mid", "a/low"]);
}

#[test]
fn aggregate_end_to_end() {
    let totals = CalendarTotals {
        total_contributions: 7,
        commits: 7,
        ..Default::default()
    };
    let repos = vec![repo("o/a", 5), repo("o/b", 5), repo("o/c", 2)];
    let stats = aggregate(2024, totals, days(&[3, 0, 1, 1, 0, 0, 2]), repos);

    assert_eq!(stats.year, 2024);
    assert_eq!(stats.max_streak, 2);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.total_contributions, 7);
    let names: Vec<&str> = stats.top_repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["o/a", "o/b", "o/c"]);
    assert_eq!(stats.daily_contributions.len(), 7);
}
