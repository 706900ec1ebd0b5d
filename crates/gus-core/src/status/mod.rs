//! GitHub user status reads and writes
//!
//! The [`StatusClient`] builds GraphQL documents, runs them through
//! `gh api graphql`, and decodes the JSON envelope into [`Status`] values.
//! Writes verify the echoed emoji and recover once from a missing `user`
//! scope.

mod client;
mod decode;
mod error;
mod query;
mod types;

pub use client::{
    ADD_SCOPE_QUESTION, MISSING_SCOPE_NOTICE, MISSING_USER_SCOPE_MARKER, StatusClient, USER_SCOPE,
    is_missing_scope,
};
pub use error::{StatusError, StatusErrorKind};
pub use query::{EXPIRY_FORMAT, OWNER_PLACEHOLDER, TEAM_PAGE_SIZE, format_emoji, format_expiry};
pub use types::{Lookup, SetOutcome, SetRequest, Status, TeamMemberStatus};
