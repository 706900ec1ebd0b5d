//! Shared logging initialization for the gh-user-status binary.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Environment variable that selects the log level.
pub const LOG_ENV: &str = "GH_USER_STATUS_LOG";

fn parse_level(value: Option<&str>) -> tracing::Level {
    match value.unwrap_or("warn").to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    }
}

/// Initialize process-level tracing output from `GH_USER_STATUS_LOG`.
///
/// Logs go to stderr so they never mix with status output on stdout.
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INIT.set(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(parse_level(None), tracing::Level::WARN);
        assert_eq!(parse_level(Some("bogus")), tracing::Level::WARN);
    }

    #[test]
    fn level_is_case_insensitive() {
        assert_eq!(parse_level(Some("DEBUG")), tracing::Level::DEBUG);
        assert_eq!(parse_level(Some("Trace")), tracing::Level::TRACE);
    }
}
