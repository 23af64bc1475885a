//! Shared HTTP client. One client per run, handed to every adapter.

use crate::domain::DomainError;
use std::time::Duration;

/// Build the client. `None` keeps reqwest's default of no overall request timeout.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, DomainError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder
        .build()
        .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))
}
