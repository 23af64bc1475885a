//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Credentials, DomainError, GenerationError, Prompt, Session};

/// Text-generation service. Turns a prompt into the body of a post.
#[async_trait::async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// Returns the text of the first completion.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}

/// Session creation on the social network.
#[async_trait::async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchange credentials for an access token and account DID.
    ///
    /// # Errors
    /// `DomainError::Auth` carrying status and the decoded error body on any
    /// non-200 response; `Transport`/`Decode` otherwise.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, DomainError>;
}

/// Post publication on the social network.
#[async_trait::async_trait]
pub trait PublisherPort: Send + Sync {
    /// Submit `text` as a new post in the session's repo. `createdAt` is stamped at send time.
    async fn publish(&self, session: &Session, text: &str) -> Result<(), DomainError>;
}
