//! AI service integration for idea and image generation
//!
//! Provides interfaces to a text-completion provider (advertising ideas) and an
//! image-generation provider (one rendered image per idea). Components depend
//! on the traits only, so tests can swap in the mocks.

pub mod mime;
pub mod mock;
pub mod openai;

pub use mock::{MockChatClient, MockImageGenerationClient};
pub use openai::{OpenAiChatClient, OpenAiHttpClient, OpenAiImageClient};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Fails with [`crate::Error::Configuration`] when the provider cannot be
    /// called at all, e.g. because credentials are missing.
    fn ensure_configured(&self) -> Result<()> {
        Ok(())
    }

    /// Run one completion with a system framing and a user prompt.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    fn ensure_configured(&self) -> Result<()> {
        Ok(())
    }

    /// Generate a single image and return a reference to it (URL or data URL).
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
