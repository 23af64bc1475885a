//! OpenAI-compatible adapter for post generation.
//!
//! Sends a fixed system instruction plus the dated countdown prompt to a
//! chat-completions endpoint and returns the first completion verbatim.

use crate::domain::{GenerationError, Prompt};
use crate::ports::TextGeneratorPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Persona, length limit and required post format. Sent verbatim as the system turn.
pub const SYSTEM_PROMPT: &str = "You're a bot on Bluesky social (handle: daysoftrump.bsky.social). You'll post a message every day. Your messages should be no more than 300 characters. Only respond as an agent with the post to share online. The format of that post should be exactly: 'X days until Y event. Rest of the message goes here #TheFinalTrumpDown'";

/// OpenAI-compatible text generator.
///
/// Works against api.openai.com or any endpoint speaking the same
/// chat-completions schema.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client (carries the configured timeout, if any)
    /// * `api_url` - Endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - Bearer key; `None` makes every call fail with `MissingApiKey`
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
        }
    }

    fn build_request(&self, prompt: &Prompt) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.text.clone(),
                },
            ],
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat-completions response body. Only the fields we read.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageContent {
    pub content: String,
}

impl ChatResponse {
    fn into_first_content(self) -> Result<String, GenerationError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(GenerationError::NoChoices)
    }
}

#[async_trait::async_trait]
impl TextGeneratorPort for OpenAiAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;

        info!(
            model = %self.model,
            milestone = ?prompt.milestone,
            "requesting post text"
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GenerationError::Transport(format!("failed to read error response body: {}", e)))?;
            warn!(status = %status, body = %body, "text generation API returned error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        let content = chat_response.into_first_content()?;
        debug!(len = content.len(), "received post text");
        Ok(content)
    }
}
