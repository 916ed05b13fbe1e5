//! Plan request error types

use thiserror::Error;

/// Errors that can occur while requesting or decoding a trip plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status; `body` is the raw response text
    #[error("Server error: {body}")]
    Server { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing field: {path}")]
    MissingField { path: String },
}

/// Coarse classification of a [`PlanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    ServerError,
    MalformedResponse,
    MissingField,
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::Transport(_) => ErrorKind::Transport,
            PlanError::Server { .. } => ErrorKind::ServerError,
            PlanError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            PlanError::MissingField { .. } => ErrorKind::MissingField,
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        PlanError::MissingField { path: path.into() }
    }

    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            PlanError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
