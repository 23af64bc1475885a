//! Bluesky (AT Protocol) adapters. Implement AuthPort and PublisherPort over XRPC.

pub mod auth_adapter;
pub mod models;
pub mod publisher;

pub use auth_adapter::XrpcAuthAdapter;
pub use publisher::XrpcPublisher;

use crate::domain::DomainError;
use models::XrpcErrorBody;

/// Read and decode the `{error, message}` body of a rejected XRPC call.
async fn read_error_body(response: reqwest::Response) -> Result<XrpcErrorBody, DomainError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| DomainError::Transport(format!("failed to read error response: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::Decode(format!("failed to decode error response: {}", e)))
}
