use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_MAX_TOKENS: u32 = 1500;
const DEFAULT_TEMPERATURE: f32 = 0.8;

pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiChatClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self::from_http(
            OpenAiHttpClient::new(api_key, Duration::from_secs(60)),
            model,
        )
    }

    pub fn from_http(http: OpenAiHttpClient, model: String) -> Self {
        Self {
            http,
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ChatService for OpenAiChatClient {
    fn ensure_configured(&self) -> Result<()> {
        self.http.ensure_configured()
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!("Sending chat completion request (model: {})", self.model);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self.http.chat_completion(&request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No response from OpenAI chat API".to_string()))?;

        if choice.finish_reason.as_deref() == Some("length") {
            tracing::warn!("Chat completion was truncated at {} tokens", self.max_tokens);
        }

        choice
            .message
            .content
            .ok_or_else(|| Error::AiProvider("Empty message from OpenAI chat API".to_string()))
    }
}
