//! Application wiring: provider clients, generators and request limits.

use crate::ai::{
    ChatService, ImageGenerationService, OpenAiChatClient, OpenAiHttpClient, OpenAiImageClient,
};
use crate::ideas::IdeaGenerator;
use crate::images::ImageBatchGenerator;
use crate::models::{Config, ImageRecord, Limits, ProductBrief};
use crate::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared, read-only state behind every request.
pub struct App {
    ideas: IdeaGenerator,
    images: ImageBatchGenerator,
    limits: Limits,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub chat: Arc<dyn ChatService>,
    pub image_gen: Arc<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices, limits: Limits) -> Self {
        Self {
            ideas: IdeaGenerator::new(services.chat),
            images: ImageBatchGenerator::new(services.image_gen)
                .with_concurrency(limits.image_concurrency),
            limits,
        }
    }

    /// Construct the OpenAI-backed app from configuration.
    ///
    /// A missing or placeholder API key does not prevent startup; generation
    /// requests fail with a configuration error instead.
    pub fn from_config(config: &Config) -> Self {
        if config.usable_api_key().is_some() {
            info!("OpenAI API key configured");
        } else {
            warn!("OpenAI API key not configured; generation endpoints will fail");
        }

        // Reuse one HTTP connection pool across provider clients.
        let http = OpenAiHttpClient::new_with_client(
            config.openai_api_key.clone(),
            config.request_timeout,
            reqwest::Client::new(),
        )
        .with_base_url(config.openai_base_url.clone());

        info!("Chat model: {}", config.chat_model);
        info!(
            "Image model: {} ({}, {})",
            config.image_model, config.image_size, config.image_quality
        );

        let chat = OpenAiChatClient::from_http(http.clone(), config.chat_model.clone());
        let image_gen = OpenAiImageClient::from_http(http, config.image_model.clone())
            .with_size(config.image_size.clone())
            .with_quality(config.image_quality.clone());

        Self::with_services(
            AppServices {
                chat: Arc::new(chat),
                image_gen: Arc::new(image_gen),
            },
            config.limits,
        )
    }

    /// Validate `requested` against the limits, then generate ideas.
    pub async fn generate_ideas(
        &self,
        brief: &ProductBrief,
        requested: i64,
    ) -> Result<Vec<String>> {
        let count = self.limits.idea_count(requested)?;
        self.ideas.generate(brief, count).await
    }

    /// Validate `requested` against the limits, then render images.
    pub async fn generate_images(
        &self,
        ideas: &[String],
        requested: i64,
    ) -> Result<Vec<ImageRecord>> {
        let count = self.limits.image_count(requested)?;
        self.images.generate(ideas, count).await
    }
}
