use crate::cli::CommonArgs;
use crate::error::Result;
use crate::github::{authenticated_username, discover_token, GithubClient};
use crate::model::YearStats;
use crate::stats::aggregate;
use anyhow::Context;
use chrono::{Datelike, Utc};
use console::style;

/// Outcome of one year's fetch/aggregate. Failures are kept alongside
/// successes so they can be reported inline without unwinding the run.
struct YearOutcome {
    year: i32,
    result: Result<YearStats>,
}

pub fn exec(common: CommonArgs, years: Vec<i32>, json: bool, compare: bool) -> anyhow::Result<()> {
    let token = discover_token().context("Failed to discover GitHub credentials")?;

    let username = match common.username {
        Some(u) => u,
        None => authenticated_username().context("Failed to resolve GitHub username")?,
    };

    let mut years = years;
    if years.is_empty() {
        years.push(Utc::now().year());
    }
    years.sort_unstable();
    years.dedup();

    if !json {
        println!("{}", style(format!("Fetching metrics for @{username}...")).dim());
    }

    let client = GithubClient::new(token);
    let outcomes: Vec<YearOutcome> = years
        .into_iter()
        .map(|year| YearOutcome {
            year,
            result: fetch_year(&client, &username, year),
        })
        .collect();

    let mut stats_list = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(stats) => stats_list.push(stats),
            // Keep stdout clean for JSON consumers
            Err(e) => eprintln!("{}", style(format!("Error fetching {}: {}", outcome.year, e)).red()),
        }
    }

    if stats_list.is_empty() {
        anyhow::bail!("no requested year could be fetched");
    }

    if json {
        println!("{}", crate::report::render_machine(&stats_list)?);
    } else if compare && stats_list.len() >= 2 {
        println!("{}", crate::report::render_comparison(&stats_list, &username));
    } else {
        let today = Utc::now().date_naive();
        for stats in &stats_list {
            println!("{}", crate::report::render_single(stats, &username, today));
        }
    }

    Ok(())
}

fn fetch_year(client: &GithubClient, username: &str, year: i32) -> Result<YearStats> {
    let activity = client.fetch_year_activity(username, year)?;
    Ok(aggregate(
        year,
        activity.totals,
        activity.daily_contributions,
        activity.repo_contributions,
    ))
}
