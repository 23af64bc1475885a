//! Implements AuthPort via `com.atproto.server.createSession`.

use super::models::{
    CREATE_SESSION_NSID, CreateSessionRequest, CreateSessionResponse, xrpc_url,
};
use super::read_error_body;
use crate::domain::{Credentials, DomainError, Session};
use crate::ports::AuthPort;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::info;

/// Session-creation adapter. One request per call; no refresh.
pub struct XrpcAuthAdapter {
    client: Client,
    url: String,
}

impl XrpcAuthAdapter {
    /// `service_url` is the PDS base, e.g. "https://bsky.social".
    pub fn new(client: Client, service_url: &str) -> Self {
        Self {
            client,
            url: xrpc_url(service_url, CREATE_SESSION_NSID),
        }
    }
}

#[async_trait]
impl AuthPort for XrpcAuthAdapter {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, DomainError> {
        let body = CreateSessionRequest {
            identifier: credentials.identifier.clone(),
            password: credentials.password.clone(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("auth request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = read_error_body(response).await?;
            return Err(DomainError::Auth {
                status: status.as_u16(),
                error: err.error,
                message: err.message,
            });
        }

        let session: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Decode(format!("failed to decode auth response: {}", e)))?;

        info!(did = %session.did, "authentication successful");

        Ok(Session {
            access_jwt: session.access_jwt,
            did: session.did,
        })
    }
}
