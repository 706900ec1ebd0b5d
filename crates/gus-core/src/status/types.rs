//! Status request and result types

use serde::Serialize;
use std::time::Duration;

/// A user's status as returned by the API
///
/// `emoji` is the shortcode the API stores (`:rocket:`), not a glyph. An empty
/// message and emoji mean "no status".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub message: String,
    pub emoji: String,
    /// Limited availability ("busy")
    pub limited: bool,
}

impl Status {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.emoji.is_empty()
    }
}

/// A team member's status, from a team roster query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamMemberStatus {
    pub login: String,
    #[serde(flatten)]
    pub status: Status,
}

/// Parameters of a status write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetRequest {
    pub message: String,
    /// Emoji alias without colons (`rocket`); empty for none
    pub emoji: String,
    pub limited: bool,
    /// Time until the status clears; zero means never
    pub expiry: Duration,
    /// Organization to limit visibility to. Reserved: resolving an org login
    /// to its node ID is not implemented, so this is never sent.
    pub org: Option<String>,
}

impl SetRequest {
    pub fn new(message: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            emoji: emoji.into(),
            ..Default::default()
        }
    }

    pub fn limited(mut self, limited: bool) -> Self {
        self.limited = limited;
        self
    }

    pub fn expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// A request that clears the status: empty message and emoji, no expiry
    pub fn clear() -> Self {
        Self::default()
    }
}

/// Result of a status write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The write went through; carries the status the API echoed back
    Applied(Status),
    /// The token lacked the required scope and the user chose not to add it.
    /// Nothing was changed.
    Declined,
}

/// What a `get` login argument refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The authenticated user
    Viewer,
    /// A user by login
    User(String),
    /// Every member of `org/slug`; an empty `org` means the current
    /// repository's owner
    Team { org: String, slug: String },
}

impl Lookup {
    /// Route a login string: empty is the viewer, `org/team` is a team,
    /// anything else a user. Splits at the first `/`.
    pub fn parse(login: &str) -> Self {
        match login.split_once('/') {
            Some((org, slug)) => Lookup::Team {
                org: org.to_string(),
                slug: slug.to_string(),
            },
            None if login.is_empty() => Lookup::Viewer,
            None => Lookup::User(login.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_routes_slash_to_team() {
        for login in ["github/hubbers", "/hubbers", "a/b/c", "org/"] {
            assert!(matches!(Lookup::parse(login), Lookup::Team { .. }), "{login}");
        }
        assert_eq!(
            Lookup::parse("a/b/c"),
            Lookup::Team {
                org: "a".to_string(),
                slug: "b/c".to_string()
            }
        );
    }

    #[test]
    fn lookup_routes_other_logins_to_user() {
        assert_eq!(Lookup::parse(""), Lookup::Viewer);
        assert_eq!(Lookup::parse("octocat"), Lookup::User("octocat".to_string()));
        assert_eq!(Lookup::parse("octo-cat_2"), Lookup::User("octo-cat_2".to_string()));
    }

    #[test]
    fn clear_request_is_empty() {
        let req = SetRequest::clear();
        assert!(req.message.is_empty());
        assert!(req.emoji.is_empty());
        assert!(!req.limited);
        assert_eq!(req.expiry, Duration::ZERO);
        assert_eq!(req.org, None);
    }

    #[test]
    fn builder_sets_fields() {
        let req = SetRequest::new("shipping", "rocket")
            .limited(true)
            .expiry(Duration::from_secs(60));
        assert_eq!(req.message, "shipping");
        assert_eq!(req.emoji, "rocket");
        assert!(req.limited);
        assert_eq!(req.expiry, Duration::from_secs(60));
    }

    #[test]
    fn team_member_serializes_flat() {
        let member = TeamMemberStatus {
            login: "octocat".to_string(),
            status: Status {
                message: "hi".to_string(),
                emoji: ":wave:".to_string(),
                limited: false,
            },
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"login": "octocat", "message": "hi", "emoji": ":wave:", "limited": false})
        );
    }
}
