//! Implements PublisherPort via `com.atproto.repo.createRecord`.

use super::models::{CREATE_RECORD_NSID, CreateRecordRequest, PostRecord, xrpc_url};
use super::read_error_body;
use crate::domain::{DomainError, Session};
use crate::ports::PublisherPort;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tracing::info;

pub struct XrpcPublisher {
    client: Client,
    url: String,
}

impl XrpcPublisher {
    /// `service_url` is the PDS base, e.g. "https://bsky.social".
    pub fn new(client: Client, service_url: &str) -> Self {
        Self {
            client,
            url: xrpc_url(service_url, CREATE_RECORD_NSID),
        }
    }
}

#[async_trait]
impl PublisherPort for XrpcPublisher {
    async fn publish(&self, session: &Session, text: &str) -> Result<(), DomainError> {
        // Stamped here, at submission, not when the run started.
        let body = CreateRecordRequest::post(session.did.clone(), PostRecord::new(text, Utc::now()));

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&session.access_jwt)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("post request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = read_error_body(response).await?;
            return Err(DomainError::Post {
                status: status.as_u16(),
                error: err.error,
                message: err.message,
            });
        }

        info!(repo = %session.did, created_at = %body.record.created_at, "post successful");
        Ok(())
    }
}
