//! Error types for business-model scoring
//!
//! Library code returns `ScoringError`; binaries and server start-up wrap it
//! with `anyhow` context.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid answer for '{field}': {message}")]
    InvalidAnswer { field: &'static str, message: String },

    #[error("Unknown business model: {0}")]
    UnknownModel(String),

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Quiz attempt not found: {0}")]
    AttemptNotFound(Uuid),

    #[error("Attempt store lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoringError {
    pub(crate) fn catalog(message: impl Into<String>) -> Self {
        ScoringError::Catalog { message: message.into() }
    }

    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ScoringError::InvalidAnswer { field, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
