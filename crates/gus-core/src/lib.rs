//! Core library for gh-user-status
//!
//! This crate reads and writes the GitHub user status (message, emoji,
//! limited-availability flag and expiry) by shelling out to the `gh` CLI.
//! It never talks to the network itself and never prints: it builds GraphQL
//! queries and mutations, hands them to `gh api graphql`, decodes the JSON
//! envelope into typed values, and renders emoji shortcodes into glyphs.
//!
//! Components:
//! - [`emoji`] - the emoji catalog and the shortcode renderer
//! - [`gh`] - the external tool invoker (`gh` subprocesses)
//! - [`status`] - the status client, request types and response decoding
//! - [`expiry`] - parsing of human expiry durations (`30m`, `7d`, `Never`)
//! - [`config`], [`home`], [`logging`] - ambient setup used by the binary

pub mod config;
pub mod emoji;
pub mod expiry;
pub mod gh;
pub mod home;
pub mod logging;
pub mod prompt;
pub mod status;

pub use emoji::{Emoji, EmojiCatalog, EmojiRenderer};
pub use gh::{GhCli, GhError, GhOutput, GhRunner};
pub use prompt::Confirm;
pub use status::{
    Lookup, SetOutcome, SetRequest, Status, StatusClient, StatusError, StatusErrorKind,
    TeamMemberStatus,
};
