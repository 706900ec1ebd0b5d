//! Error types for command execution

use thiserror::Error;

/// Command usage errors detected before anything is sent to gh
#[derive(Debug, Error)]
pub enum CommandError {
    /// `org/` or `/` with nothing after the slash
    #[error("invalid team '{0}': expected <org>/<team>")]
    InvalidTeam(String),

    /// `set` with no message and no terminal to ask for one
    #[error("a status message is required when stdin is not a terminal")]
    MessageRequired,

    /// stdin closed in the middle of an interactive prompt
    #[error("input closed before the prompt was answered")]
    InputClosed,
}
