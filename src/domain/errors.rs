//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Failure while obtaining the post text. Never fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("received non-200 response status: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("no response choices returned")]
    NoChoices,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Session creation rejected. Fields are copied verbatim from the error body.
    #[error("auth error ({status}): {error} - {message}")]
    Auth {
        status: u16,
        error: String,
        message: String,
    },

    /// Record creation rejected. Fields are copied verbatim from the error body.
    #[error("post error ({status}): {error} - {message}")]
    Post {
        status: u16,
        error: String,
        message: String,
    },
}
