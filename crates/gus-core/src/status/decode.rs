//! Response decoding
//!
//! Every level of the expected path is optional in the serde types so that a
//! missing or `null` level becomes a [`StatusError::Decode`] naming the path,
//! instead of a generic serde failure. Unknown fields are ignored.

use super::error::StatusError;
use super::types::{Status, TeamMemberStatus};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Status object as the API spells it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GhStatus {
    #[serde(default)]
    indicates_limited_availability: bool,
    message: Option<String>,
    emoji: Option<String>,
}

impl From<&GhStatus> for Status {
    fn from(s: &GhStatus) -> Self {
        Status {
            message: s.message.clone().unwrap_or_default(),
            emoji: s.emoji.clone().unwrap_or_default(),
            limited: s.indicates_limited_availability,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatusOwner {
    status: Option<GhStatus>,
}

#[derive(Debug, Deserialize)]
struct UserData {
    viewer: Option<StatusOwner>,
    user: Option<StatusOwner>,
}

#[derive(Debug, Deserialize)]
struct TeamData {
    organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
struct Organization {
    team: Option<Team>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Team {
    member_statuses: Option<MemberStatuses>,
}

#[derive(Debug, Deserialize)]
struct MemberStatuses {
    nodes: Option<Vec<MemberStatus>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberStatus {
    #[serde(default)]
    indicates_limited_availability: bool,
    message: Option<String>,
    emoji: Option<String>,
    user: Option<GhUser>,
}

#[derive(Debug, Deserialize)]
struct GhUser {
    login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutationData {
    change_user_status: Option<ChangeUserStatus>,
}

#[derive(Debug, Deserialize)]
struct ChangeUserStatus {
    status: Option<GhStatus>,
}

/// Parsed envelope plus any GraphQL error text, for error messages
struct Decoded<T> {
    data: Option<T>,
    errors: String,
}

impl<T> Decoded<T> {
    fn missing(&self, path: &str) -> StatusError {
        if self.errors.is_empty() {
            StatusError::decode(format!("expected {path} in response"))
        } else {
            StatusError::decode(format!(
                "expected {path} in response; GraphQL errors: {}",
                self.errors
            ))
        }
    }
}

fn parse_envelope<T: DeserializeOwned>(stdout: &[u8]) -> Result<Decoded<T>, StatusError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(stdout).map_err(|e| StatusError::decode(e.to_string()))?;
    let errors = envelope
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(Decoded {
        data: envelope.data,
        errors,
    })
}

/// Decode a viewer (`login` empty) or user status read
pub(crate) fn decode_user_status(stdout: &[u8], login: &str) -> Result<Status, StatusError> {
    let decoded = parse_envelope::<UserData>(stdout)?;
    let key = if login.is_empty() { "viewer" } else { "user" };

    let data = decoded.data.as_ref().ok_or_else(|| decoded.missing("data"))?;
    let owner = if login.is_empty() { &data.viewer } else { &data.user };
    let owner = owner
        .as_ref()
        .ok_or_else(|| decoded.missing(&format!("data.{key}")))?;
    let status = owner
        .status
        .as_ref()
        .ok_or_else(|| decoded.missing(&format!("data.{key}.status")))?;

    Ok(Status::from(status))
}

/// Decode a team roster read
pub(crate) fn decode_team_statuses(stdout: &[u8]) -> Result<Vec<TeamMemberStatus>, StatusError> {
    let decoded = parse_envelope::<TeamData>(stdout)?;
    let nodes = decoded
        .data
        .as_ref()
        .ok_or_else(|| decoded.missing("data"))?
        .organization
        .as_ref()
        .ok_or_else(|| decoded.missing("data.organization"))?
        .team
        .as_ref()
        .ok_or_else(|| decoded.missing("data.organization.team"))?
        .member_statuses
        .as_ref()
        .ok_or_else(|| decoded.missing("data.organization.team.memberStatuses"))?
        .nodes
        .as_ref()
        .ok_or_else(|| decoded.missing("data.organization.team.memberStatuses.nodes"))?;

    Ok(nodes
        .iter()
        .map(|node| TeamMemberStatus {
            login: node.user.as_ref().map(|u| u.login.clone()).unwrap_or_default(),
            status: Status {
                message: node.message.clone().unwrap_or_default(),
                emoji: node.emoji.clone().unwrap_or_default(),
                limited: node.indicates_limited_availability,
            },
        })
        .collect())
}

/// Decode the status echoed by `changeUserStatus`
///
/// A `null` status is what the API returns once a status is cleared, so it
/// decodes as the empty status.
pub(crate) fn decode_changed_status(stdout: &[u8]) -> Result<Status, StatusError> {
    let decoded = parse_envelope::<MutationData>(stdout)?;
    let change = decoded
        .data
        .as_ref()
        .ok_or_else(|| decoded.missing("data"))?
        .change_user_status
        .as_ref()
        .ok_or_else(|| decoded.missing("data.changeUserStatus"))?;
    Ok(change.status.as_ref().map(Status::from).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_err(result: Result<impl std::fmt::Debug, StatusError>) -> String {
        match result {
            Err(StatusError::Decode { message }) => message,
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn viewer_status_decodes() {
        let json = br#"{"data":{"viewer":{"status":{"indicatesLimitedAvailability":true,"message":"heads down","emoji":":zzz:"}}}}"#;
        let status = decode_user_status(json, "").unwrap();
        assert_eq!(
            status,
            Status {
                message: "heads down".to_string(),
                emoji: ":zzz:".to_string(),
                limited: true
            }
        );
    }

    #[test]
    fn user_status_decodes_with_nulls() {
        let json = br#"{"data":{"user":{"status":{"indicatesLimitedAvailability":false,"message":null,"emoji":null}}}}"#;
        let status = decode_user_status(json, "octocat").unwrap();
        assert!(status.is_empty());
    }

    #[test]
    fn missing_status_is_decode_error() {
        let json = br#"{"data":{"user":{"status":null}}}"#;
        let msg = decode_err(decode_user_status(json, "octocat"));
        assert!(msg.contains("data.user.status"), "{msg}");
    }

    #[test]
    fn wrong_key_is_decode_error() {
        // A viewer-shaped response for a user lookup is drift, not a status.
        let json = br#"{"data":{"viewer":{"status":{"message":"hi","emoji":":wave:"}}}}"#;
        let msg = decode_err(decode_user_status(json, "octocat"));
        assert!(msg.contains("data.user"), "{msg}");
    }

    #[test]
    fn graphql_errors_are_surfaced() {
        let json = br#"{"data":{"user":null},"errors":[{"type":"NOT_FOUND","message":"Could not resolve to a User with the login of 'nobody'."}]}"#;
        let msg = decode_err(decode_user_status(json, "nobody"));
        assert!(msg.contains("Could not resolve to a User"), "{msg}");
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let msg = decode_err(decode_user_status(b"not json", ""));
        assert!(!msg.is_empty());
    }

    #[test]
    fn team_statuses_decode() {
        let json = br#"{"data":{"organization":{"team":{"memberStatuses":{"nodes":[
            {"indicatesLimitedAvailability":false,"message":"hi","emoji":":wave:","user":{"login":"a"}},
            {"indicatesLimitedAvailability":true,"message":"away","emoji":":palm_tree:","user":{"login":"b"}}
        ]}}}}}"#;
        let members = decode_team_statuses(json).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].login, "a");
        assert_eq!(members[0].status.emoji, ":wave:");
        assert!(members[1].status.limited);
    }

    #[test]
    fn missing_team_is_decode_error() {
        let json = br#"{"data":{"organization":{"team":null}}}"#;
        let msg = decode_err(decode_team_statuses(json));
        assert!(msg.contains("data.organization.team"), "{msg}");
    }

    #[test]
    fn changed_status_decodes() {
        let json = br#"{"data":{"changeUserStatus":{"status":{"message":"shipping","emoji":":rocket:"}}}}"#;
        let status = decode_changed_status(json).unwrap();
        assert_eq!(status.emoji, ":rocket:");
        assert_eq!(status.message, "shipping");
    }

    #[test]
    fn cleared_status_decodes_empty() {
        let json = br#"{"data":{"changeUserStatus":{"status":null}}}"#;
        assert!(decode_changed_status(json).unwrap().is_empty());
    }

    #[test]
    fn missing_mutation_key_is_decode_error() {
        let msg = decode_err(decode_changed_status(br#"{"data":{}}"#));
        assert!(msg.contains("data.changeUserStatus"), "{msg}");
    }
}
