use super::{ChatService, ImageGenerationService};
use crate::error::ErrorKind;
use crate::models::PLACEHOLDER_API_KEY;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

fn mock_error(kind: ErrorKind, message: &str) -> Error {
    let message = message.to_string();
    match kind {
        ErrorKind::Configuration => Error::Configuration(message),
        ErrorKind::InvalidRequest => Error::InvalidRequest(message),
        ErrorKind::MalformedBody => Error::MalformedBody(message),
        ErrorKind::Authentication => Error::Authentication(message),
        ErrorKind::RateLimited => Error::RateLimited(message),
        ErrorKind::Upstream => Error::AiProvider(message),
        ErrorKind::Internal => Error::Internal(message),
    }
}

fn not_configured() -> Error {
    Error::Configuration(format!(
        "OpenAI API key not configured ({} or missing)",
        PLACEHOLDER_API_KEY
    ))
}

pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Option<ErrorKind>,
    configured: bool,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            configured: true,
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Every completion fails with an error of this kind.
    pub fn with_failure(mut self, kind: ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// User prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    fn ensure_configured(&self) -> Result<()> {
        if self.configured {
            Ok(())
        } else {
            Err(not_configured())
        }
    }

    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.prompts.lock().unwrap().push(user.to_string());

        if let Some(kind) = self.failure {
            return Err(mock_error(kind, "mock chat failure"));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("Idea one\nIdea two\nIdea three".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

pub struct MockImageGenerationClient {
    image_responses: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<Vec<String>>>,
    configured: bool,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(Vec::new())),
            configured: true,
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, url: String) -> Self {
        self.image_responses.lock().unwrap().push(url);
        self
    }

    /// Fail any request whose prompt contains `needle`.
    pub fn failing_on(self, needle: &str) -> Self {
        self.failing.lock().unwrap().push(needle.to_string());
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    fn ensure_configured(&self) -> Result<()> {
        if self.configured {
            Ok(())
        } else {
            Err(not_configured())
        }
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let count = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count
        };
        self.prompts.lock().unwrap().push(prompt.to_string());

        let should_fail = self
            .failing
            .lock()
            .unwrap()
            .iter()
            .any(|needle| prompt.contains(needle.as_str()));
        if should_fail {
            return Err(Error::AiProvider(
                "mock image failure: content policy violation".to_string(),
            ));
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(format!("https://images.mock/{}.png", count))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_client_default_response() {
        let client = MockChatClient::new();

        let text = client.complete("system", "user").await.unwrap();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(client.prompts(), vec!["user".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_chat_client_custom_responses() {
        let client = MockChatClient::new()
            .with_response("first".to_string())
            .with_response("second".to_string());

        assert_eq!(client.complete("", "").await.unwrap(), "first");
        assert_eq!(client.complete("", "").await.unwrap(), "second");

        // Should cycle back
        assert_eq!(client.complete("", "").await.unwrap(), "first");
        assert_eq!(client.get_call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_chat_client_failure() {
        let client = MockChatClient::new().with_failure(ErrorKind::RateLimited);

        let err = client.complete("", "").await.unwrap_err();
        assert!(matches!(err, Error::RateLimited(_)));
    }

    #[test]
    fn test_mock_chat_client_unconfigured() {
        let client = MockChatClient::new().unconfigured();
        assert!(matches!(
            client.ensure_configured(),
            Err(Error::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_image_client_failing_prompt() {
        let client = MockImageGenerationClient::new().failing_on("broken");

        assert!(client.generate_image("a broken idea").await.is_err());
        assert_eq!(
            client.generate_image("a fine idea").await.unwrap(),
            "https://images.mock/2.png"
        );
        assert_eq!(client.get_call_count(), 2);
    }
}
