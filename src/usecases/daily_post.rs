//! The daily run: generate text -> open session -> publish.
//!
//! - Generation errors are logged and the run continues with an empty message
//! - Authentication and publishing errors abort the run
//! - Strictly sequential; each step completes before the next starts

use crate::domain::{Credentials, DomainError, RunOutcome, Schedule};
use crate::ports::{AuthPort, PublisherPort, TextGeneratorPort};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DailyPostService {
    generator: Arc<dyn TextGeneratorPort>,
    auth: Arc<dyn AuthPort>,
    publisher: Arc<dyn PublisherPort>,
    schedule: Schedule,
}

impl DailyPostService {
    pub fn new(
        generator: Arc<dyn TextGeneratorPort>,
        auth: Arc<dyn AuthPort>,
        publisher: Arc<dyn PublisherPort>,
        schedule: Schedule,
    ) -> Self {
        Self {
            generator,
            auth,
            publisher,
            schedule,
        }
    }

    /// Text for a run started at `started_at`. Empty when generation fails.
    pub async fn compose(&self, started_at: DateTime<Utc>) -> String {
        let prompt = self.schedule.prompt_for(started_at);
        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                // Not fatal: the run goes on and posts the empty text.
                warn!(error = %e, "error getting AI response");
                String::new()
            }
        }
    }

    /// One full run. `started_at` is the time captured once at process start.
    ///
    /// Returns `RunOutcome::Retired` without touching any port once the
    /// schedule's retirement date has been reached.
    pub async fn run(
        &self,
        started_at: DateTime<Utc>,
        credentials: &Credentials,
    ) -> Result<RunOutcome, DomainError> {
        if self.schedule.is_retired(started_at) {
            info!(retire_on = %self.schedule.retire_on, "past retirement date, nothing to do");
            return Ok(RunOutcome::Retired);
        }

        let text = self.compose(started_at).await;
        info!(post = %text, "generated post");

        let session = self.auth.authenticate(credentials).await?;
        self.publisher.publish(&session, &text).await?;

        Ok(RunOutcome::Posted { text })
    }
}
