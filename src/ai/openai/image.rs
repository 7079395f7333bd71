use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::{mime, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: String,
    size: String,
    quality: String,
}

impl OpenAiImageClient {
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
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }

    pub fn with_size(mut self, size: String) -> Self {
        self.size = size;
        self
    }

    pub fn with_quality(mut self, quality: String) -> Self {
        self.quality = quality;
        self
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    fn ensure_configured(&self) -> Result<()> {
        self.http.ensure_configured()
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending image generation request (model: {})", self.model);

        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: self.size.clone(),
            quality: self.quality.clone(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        let image_data = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No image data in OpenAI response".to_string()))?;

        if let Some(url) = image_data.url {
            Ok(url)
        } else if let Some(b64_json) = image_data.b64_json {
            mime::data_url(&b64_json)
        } else {
            Err(Error::AiProvider(
                "No image data (neither URL nor base64) in response".to_string(),
            ))
        }
    }
}
