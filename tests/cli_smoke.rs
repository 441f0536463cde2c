use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_succeeds() {
    Command::cargo_bin("ghm").unwrap().arg("--help").assert().success();
}

#[test]
fn version_succeeds() {
    Command::cargo_bin("ghm").unwrap().arg("--version").assert().success();
}

#[test]
fn compare_requires_two_years() {
    Command::cargo_bin("ghm")
        .unwrap()
        .args(["compare", "2024"])
        .assert()
        .failure();
}

#[test]
fn report_without_credentials_fails_before_fetching() {
    let output = Command::cargo_bin("ghm")
        .unwrap()
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env("PATH", "/nonexistent")
        .args(["report", "2024", "-u", "alice"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("credentials"), "stderr was: {stderr}");
}
