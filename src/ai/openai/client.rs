use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};
use crate::models::usable_api_key;
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Thin OpenAI REST client shared by the chat and image clients.
///
/// Non-2xx responses are classified here: 401/403 become
/// [`Error::Authentication`], 429 becomes [`Error::RateLimited`] and anything
/// else [`Error::AiProvider`].
#[derive(Clone)]
pub struct OpenAiHttpClient {
    pub(crate) client: Client,
    api_key: Option<String>,
    pub(crate) base_url: String,
    timeout: Duration,
}

impl OpenAiHttpClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self::new_with_client(api_key, timeout, Client::new())
    }

    pub fn new_with_client(api_key: Option<String>, timeout: Duration, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn ensure_configured(&self) -> Result<()> {
        self.api_key().map(|_| ())
    }

    fn api_key(&self) -> Result<&str> {
        usable_api_key(self.api_key.as_deref()).ok_or_else(|| {
            Error::Configuration(
                "OpenAI API key not configured. Please check your environment variables."
                    .to_string(),
            )
        })
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("OpenAI API error (status {}): {}", status, error_text);
            return Err(classify_error(status, &error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse OpenAI response: {}", e))
        })
    }

    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.post("/v1/chat/completions", request).await
    }
}

/// Map a failed OpenAI response onto the error taxonomy, keeping the
/// provider's own message when the body carries one.
pub(crate) fn classify_error(status: StatusCode, body: &str) -> Error {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            if let Some(error_type) = &envelope.error.error_type {
                tracing::debug!("OpenAI error type: {}", error_type);
            }
            envelope.error.message
        }
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body.trim().to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(message),
        _ => Error::AiProvider(format!("status {}: {}", status, message)),
    }
}
