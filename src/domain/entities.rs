//! Domain entities. Request-scoped value objects; nothing here outlives a run.
//!
//! No HTTP/wire types here — adapters map to and from these.

use std::fmt;

/// Account handle (or email) and password used to open a session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Short-lived session returned by authentication. Consumed once by the publisher.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token.
    pub access_jwt: String,
    /// Account DID; the repo the post is written to.
    pub did: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_jwt", &"<redacted>")
            .field("did", &self.did)
            .finish()
    }
}

/// Result of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The post was accepted. Carries the text that was submitted.
    Posted { text: String },
    /// Past the retirement date; nothing was sent.
    Retired,
}
