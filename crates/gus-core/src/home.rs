//! Home directory resolution
//!
//! # Precedence
//!
//! 1. `GH_USER_STATUS_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default
//!
//! Integration tests set `GH_USER_STATUS_HOME` to a temporary directory so the
//! user's real config file never leaks into a test run.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "GH_USER_STATUS_HOME";

/// Get the home directory used to locate the config file
///
/// # Errors
///
/// Returns an error if `GH_USER_STATUS_HOME` is not set and the platform home
/// directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}
