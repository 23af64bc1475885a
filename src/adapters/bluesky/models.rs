//! XRPC wire models for session creation and record creation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const CREATE_SESSION_NSID: &str = "com.atproto.server.createSession";
pub const CREATE_RECORD_NSID: &str = "com.atproto.repo.createRecord";
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// `<service>/xrpc/<nsid>`, tolerating a trailing slash on the service URL.
pub fn xrpc_url(service_url: &str, nsid: &str) -> String {
    format!("{}/xrpc/{}", service_url.trim_end_matches('/'), nsid)
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSessionRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub access_jwt: String,
    pub did: String,
}

/// Error body returned with any non-200 status.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct XrpcErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// `app.bsky.feed.post` record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub record_type: String,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl PostRecord {
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            record_type: POST_COLLECTION.to_string(),
            text: text.into(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRecordRequest {
    pub repo: String,
    pub collection: String,
    pub record: PostRecord,
}

impl CreateRecordRequest {
    /// Wrap a post record for the given account DID.
    pub fn post(did: impl Into<String>, record: PostRecord) -> Self {
        Self {
            repo: did.into(),
            collection: POST_COLLECTION.to_string(),
            record,
        }
    }
}
