//! Status client errors

use crate::gh::GhError;
use thiserror::Error;

/// Errors returned by [`StatusClient`](super::StatusClient) operations
#[derive(Debug, Error)]
pub enum StatusError {
    /// `gh` was missing or failed
    #[error(transparent)]
    Gh(#[from] GhError),

    /// The response did not have the expected shape
    #[error("failed to deserialize JSON: {message}")]
    Decode { message: String },

    /// The write was accepted but the echoed emoji differs from what was sent
    #[error("failed to set status: sent emoji '{sent}' but GitHub recorded '{echoed}'. Perhaps try another emoji")]
    Verification { sent: String, echoed: String },

    /// The request could not be turned into a query
    #[error("invalid status request: {message}")]
    InvalidRequest { message: String },

    /// Asking the user for confirmation failed
    #[error("could not prompt: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Coarse classification of a [`StatusError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusErrorKind {
    ToolNotFound,
    ToolExecutionFailed,
    DecodeError,
    VerificationFailed,
    InvalidRequest,
    PromptFailed,
}

impl StatusError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        StatusError::Decode {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> StatusErrorKind {
        match self {
            StatusError::Gh(err) if err.is_not_found() => StatusErrorKind::ToolNotFound,
            StatusError::Gh(_) => StatusErrorKind::ToolExecutionFailed,
            StatusError::Decode { .. } => StatusErrorKind::DecodeError,
            StatusError::Verification { .. } => StatusErrorKind::VerificationFailed,
            StatusError::InvalidRequest { .. } => StatusErrorKind::InvalidRequest,
            StatusError::Prompt(_) => StatusErrorKind::PromptFailed,
        }
    }
}
