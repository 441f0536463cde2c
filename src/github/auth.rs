use crate::error::{GhmError, Result};
use std::process::Command;

/// Discover a GitHub token: GITHUB_TOKEN, then GH_TOKEN, then `gh auth token`.
/// Blank values are treated as absent.
pub fn discover_token() -> Result<String> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(t) = std::env::var(var) {
            if !t.trim().is_empty() {
                return Ok(t);
            }
        }
    }

    if let Ok(output) = Command::new("gh").args(["auth", "token"]).output() {
        if output.status.success() {
            let t = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !t.is_empty() {
                return Ok(t);
            }
        }
    }

    Err(GhmError::Config(
        "GitHub token not found. Set GITHUB_TOKEN or login with `gh auth login`".to_string(),
    ))
}

/// Username of the authenticated `gh` user.
pub fn authenticated_username() -> Result<String> {
    let output = Command::new("gh")
        .args(["api", "user", "-q", ".login"])
        .output()
        .map_err(|_| GhmError::Config("Could not determine GitHub username".to_string()))?;

    if !output.status.success() {
        return Err(GhmError::Config(
            "Could not determine GitHub username".to_string(),
        ));
    }

    let login = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if login.is_empty() {
        return Err(GhmError::Config(
            "Could not determine GitHub username".to_string(),
        ));
    }
    Ok(login)
}
