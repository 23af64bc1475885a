//! Application configuration. Credentials, endpoints, calendar.

use crate::domain::{Credentials, DomainError, Schedule};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BLUESKY_SERVICE_URL: &str = "https://bsky.social";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Account handle or email. Read from BLUESKY_USERNAME.
    #[serde(default)]
    pub bluesky_username: Option<String>,

    /// Account (app) password. Read from BLUESKY_PASSWORD.
    #[serde(default)]
    pub bluesky_password: Option<String>,

    /// PDS base URL. Defaults to https://bsky.social.
    #[serde(default)]
    pub bluesky_service_url: Option<String>,

    /// Text-generation key. Read from OPENAI_API_KEY.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Chat-completions endpoint. Defaults to OpenAI.
    #[serde(default)]
    pub openai_api_url: Option<String>,

    /// Defaults to "gpt-4o-mini".
    #[serde(default)]
    pub openai_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Calendar
    // ─────────────────────────────────────────────────────────────────────────
    /// Before this date posts count down to the inauguration (default 2025-01-20).
    #[serde(default)]
    pub inauguration_date: Option<NaiveDate>,

    /// From the inauguration on, posts count down to this date (default 2029-01-20).
    #[serde(default)]
    pub term_end_date: Option<NaiveDate>,

    /// Runs on or after this date do nothing (default 2029-01-20).
    #[serde(default)]
    pub retire_on: Option<NaiveDate>,

    /// Per-request timeout in seconds. Unset means requests wait indefinitely.
    /// Read from COUNTDOWN_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Non-empty value of an environment variable.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load from `COUNTDOWN_*` env vars plus the optional file named by COUNTDOWN_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("COUNTDOWN_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("COUNTDOWN"));
        c.build()?.try_deserialize()
    }

    /// Load only from a config file (format inferred from the extension).
    #[cfg(test)]
    fn load_file(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// True when ENVIRONMENT=production; the local .env file is skipped then.
    pub fn is_production() -> bool {
        std::env::var("ENVIRONMENT").is_ok_and(|v| v == "production")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bluesky
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the account identifier from config or BLUESKY_USERNAME env.
    pub fn bluesky_username(&self) -> Option<String> {
        self.bluesky_username
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| env_non_empty("BLUESKY_USERNAME"))
    }

    /// Returns the account password from config or BLUESKY_PASSWORD env.
    pub fn bluesky_password(&self) -> Option<String> {
        self.bluesky_password
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| env_non_empty("BLUESKY_PASSWORD"))
    }

    /// Both account values, or a config error naming the first one missing.
    pub fn credentials(&self) -> Result<Credentials, DomainError> {
        let username = self.bluesky_username().ok_or_else(|| {
            DomainError::Config("BLUESKY_USERNAME environment variable not set".into())
        })?;
        let password = self.bluesky_password().ok_or_else(|| {
            DomainError::Config("BLUESKY_PASSWORD environment variable not set".into())
        })?;
        Ok(Credentials::new(username, password))
    }

    pub fn bluesky_service_url_or_default(&self) -> String {
        self.bluesky_service_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BLUESKY_SERVICE_URL.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the API key from config or OPENAI_API_KEY env.
    pub fn openai_api_key(&self) -> Option<String> {
        self.openai_api_key
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| env_non_empty("OPENAI_API_KEY"))
    }

    pub fn openai_api_url_or_default(&self) -> String {
        self.openai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string())
    }

    pub fn openai_model_or_default(&self) -> String {
        self.openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Calendar / transport
    // ─────────────────────────────────────────────────────────────────────────

    /// Threshold and retirement dates, each falling back to its default.
    pub fn schedule(&self) -> Schedule {
        let defaults = Schedule::default();
        Schedule {
            inauguration: self.inauguration_date.unwrap_or(defaults.inauguration),
            term_end: self.term_end_date.unwrap_or(defaults.term_end),
            retire_on: self.retire_on.unwrap_or(defaults.retire_on),
        }
    }

    /// Zero is treated as unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
