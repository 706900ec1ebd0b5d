//! GraphQL documents and `gh` argument vectors
//!
//! Values are always passed as GraphQL variables, never spliced into the
//! document. `-f` sends a string variable; `-F` lets gh convert the value
//! (booleans, `null`, and the `{owner}` placeholder).

use super::error::StatusError;
use super::types::SetRequest;
use chrono::{DateTime, FixedOffset, TimeDelta};

/// Maximum number of team members returned by a roster query.
///
/// There is no cursor-following: members past the first page are dropped.
pub const TEAM_PAGE_SIZE: usize = 100;

/// gh placeholder resolved to the owner of the current repository
pub const OWNER_PLACEHOLDER: &str = "{owner}";

/// Timestamp layout for `expiresAt`, e.g. `2026-10-18T14:30:00+0200`
pub const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub(crate) const VIEWER_STATUS_QUERY: &str =
    "query { viewer { status { indicatesLimitedAvailability message emoji } } }";

pub(crate) const USER_STATUS_QUERY: &str = "query($login: String!) { user(login: $login) { status { indicatesLimitedAvailability message emoji } } }";

pub(crate) const TEAM_STATUS_QUERY: &str = "query($org: String!, $slug: String!) {
  organization(login: $org) {
    team(slug: $slug) {
      memberStatuses(first: 100) {
        nodes { indicatesLimitedAvailability message emoji user { login } }
      }
    }
  }
}";

pub(crate) const CHANGE_STATUS_MUTATION: &str = "mutation($emoji: String!, $message: String!, $limited: Boolean!, $expiry: DateTime) {
  changeUserStatus(input: {emoji: $emoji, message: $message, limitedAvailability: $limited, expiresAt: $expiry}) {
    status { indicatesLimitedAvailability message emoji }
  }
}";

fn graphql_args(query: &str) -> Vec<String> {
    vec![
        "api".to_string(),
        "graphql".to_string(),
        "-f".to_string(),
        format!("query={query}"),
    ]
}

fn push_field(args: &mut Vec<String>, flag: &str, key: &str, value: &str) {
    args.push(flag.to_string());
    args.push(format!("{key}={value}"));
}

/// Arguments for a single-user status read; an empty login reads the viewer
pub(crate) fn user_status_args(login: &str) -> Vec<String> {
    if login.is_empty() {
        return graphql_args(VIEWER_STATUS_QUERY);
    }
    let mut args = graphql_args(USER_STATUS_QUERY);
    push_field(&mut args, "-f", "login", login);
    args
}

/// Arguments for a team roster read; an empty org becomes `{owner}`
pub(crate) fn team_status_args(org: &str, slug: &str) -> Vec<String> {
    let mut args = graphql_args(TEAM_STATUS_QUERY);
    if org.is_empty() {
        push_field(&mut args, "-F", "org", OWNER_PLACEHOLDER);
    } else {
        push_field(&mut args, "-f", "org", org);
    }
    push_field(&mut args, "-f", "slug", slug);
    args
}

/// Shortcode sent for an alias: `rocket` becomes `:rocket:`, empty stays empty
pub fn format_emoji(alias: &str) -> String {
    let alias = alias.trim_matches(':');
    if alias.is_empty() {
        String::new()
    } else {
        format!(":{alias}:")
    }
}

/// `expiresAt` value: `null` for zero, otherwise `now + expiry`
pub fn format_expiry(
    expiry: std::time::Duration,
    now: DateTime<FixedOffset>,
) -> Result<String, StatusError> {
    if expiry.is_zero() {
        return Ok("null".to_string());
    }
    let at = TimeDelta::from_std(expiry)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| StatusError::InvalidRequest {
            message: format!("expiry of {}s is out of range", expiry.as_secs()),
        })?;
    Ok(at.format(EXPIRY_FORMAT).to_string())
}

/// Arguments for the `changeUserStatus` mutation
pub(crate) fn change_status_args(
    request: &SetRequest,
    now: DateTime<FixedOffset>,
) -> Result<Vec<String>, StatusError> {
    let mut args = graphql_args(CHANGE_STATUS_MUTATION);
    push_field(&mut args, "-f", "message", &request.message);
    push_field(&mut args, "-f", "emoji", &format_emoji(&request.emoji));
    push_field(&mut args, "-F", "limited", if request.limited { "true" } else { "false" });
    push_field(&mut args, "-F", "expiry", &format_expiry(request.expiry, now)?);
    Ok(args)
}

/// Arguments for `gh auth refresh` requesting `scope`
pub(crate) fn auth_refresh_args(scope: &str) -> Vec<String> {
    ["auth", "refresh", "-s", scope]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
