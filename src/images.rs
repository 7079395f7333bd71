//! Best-effort image batches
//!
//! Each idea gets exactly one image request. Failed ideas are logged and
//! dropped; the batch as a whole only fails when it cannot start.

use crate::ai::ImageGenerationService;
use crate::models::ImageRecord;
use crate::{prompts, Error, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ImageBatchGenerator {
    images: Arc<dyn ImageGenerationService>,
    concurrency: usize,
}

impl ImageBatchGenerator {
    pub fn new(images: Arc<dyn ImageGenerationService>) -> Self {
        Self {
            images,
            concurrency: 1,
        }
    }

    /// Number of image requests in flight at once. Output order is unaffected.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Render images for the first `count` ideas.
    ///
    /// A record's `id` is the idea's 1-based position in the input, so ids
    /// skip over ideas whose image could not be generated.
    pub async fn generate(&self, ideas: &[String], count: usize) -> Result<Vec<ImageRecord>> {
        self.images
            .ensure_configured()
            .map_err(|e| Error::AiProvider(format!("Image generation unavailable: {}", e)))?;

        let attempted = ideas.len().min(count);
        info!("Generating images for {} ideas", attempted);

        let results: Vec<Option<ImageRecord>> =
            stream::iter(ideas.iter().take(count).cloned().enumerate())
                .map(|(index, idea)| async move { self.render(index + 1, &idea).await })
                .buffered(self.concurrency)
                .collect()
                .await;

        let records: Vec<ImageRecord> = results.into_iter().flatten().collect();
        info!("Generated {}/{} images", records.len(), attempted);

        Ok(records)
    }

    async fn render(&self, id: usize, idea: &str) -> Option<ImageRecord> {
        if idea.trim().is_empty() {
            warn!("[{}] Skipping blank idea", id);
            return None;
        }

        match self.images.generate_image(&prompts::image_prompt(idea)).await {
            Ok(url) => Some(ImageRecord::new(id, idea.to_string(), url)),
            Err(e) => {
                warn!("[{}] Image generation failed, skipping: {}", id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockImageGenerationClient;
    use pretty_assertions::assert_eq;

    fn ideas(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failed_idea_is_skipped_and_ids_keep_position() {
        let client = Arc::new(MockImageGenerationClient::new().failing_on("Idea B"));
        let generator = ImageBatchGenerator::new(client.clone());

        let records = generator
            .generate(&ideas(&["Idea A", "Idea B", "Idea C"]), 3)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].idea, "Idea A");
        assert_eq!(records[1].id, 3);
        assert_eq!(records[1].idea, "Idea C");
        assert_eq!(client.get_call_count(), 3);
    }

    #[tokio::test]
    async fn test_all_variants_share_one_reference() {
        let client = Arc::new(
            MockImageGenerationClient::new()
                .with_image_response("https://images.example/1.png".to_string()),
        );
        let generator = ImageBatchGenerator::new(client);

        let records = generator.generate(&ideas(&["Only"]), 1).await.unwrap();

        let record = &records[0];
        assert_eq!(record.url, "https://images.example/1.png");
        assert_eq!(record.variants.square, record.url);
        assert_eq!(record.variants.portrait, record.url);
        assert_eq!(record.variants.landscape, record.url);
    }

    #[tokio::test]
    async fn test_count_limits_attempts() {
        let client = Arc::new(MockImageGenerationClient::new());
        let generator = ImageBatchGenerator::new(client.clone());

        let records = generator
            .generate(&ideas(&["a", "b", "c", "d"]), 2)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(client.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_count_above_input_is_clamped() {
        let client = Arc::new(MockImageGenerationClient::new());
        let generator = ImageBatchGenerator::new(client.clone());

        let records = generator.generate(&ideas(&["a", "b"]), 30).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(client.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_prompt_embeds_idea_text() {
        let client = Arc::new(MockImageGenerationClient::new());
        let generator = ImageBatchGenerator::new(client.clone());

        generator
            .generate(&ideas(&["Umbrella made of maps"]), 1)
            .await
            .unwrap();

        assert!(client.prompts()[0].contains("Umbrella made of maps"));
    }

    #[tokio::test]
    async fn test_blank_idea_is_skipped_without_call() {
        let client = Arc::new(MockImageGenerationClient::new());
        let generator = ImageBatchGenerator::new(client.clone());

        let records = generator
            .generate(&ideas(&["  ", "Real idea"]), 2)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_provider_fails_whole_batch() {
        let client = Arc::new(MockImageGenerationClient::new().unconfigured());
        let generator = ImageBatchGenerator::new(client.clone());

        let err = generator.generate(&ideas(&["a"]), 1).await.unwrap_err();

        assert!(matches!(err, Error::AiProvider(_)));
        assert_eq!(client.get_call_count(), 0);
    }

    #[test]
    fn test_generate_future_is_send() {
        fn assert_send<T: Send>(_: &T) {}

        let generator = ImageBatchGenerator::new(Arc::new(MockImageGenerationClient::new()));
        let input = ideas(&["a", "b"]);
        let future = generator.generate(&input, 2);
        assert_send(&future);
    }

    #[tokio::test]
    async fn test_concurrent_batch_preserves_order() {
        let client = Arc::new(MockImageGenerationClient::new().failing_on("idea 4"));
        let generator = ImageBatchGenerator::new(client).with_concurrency(4);

        let input: Vec<String> = (1..=8).map(|i| format!("idea {}", i)).collect();
        let records = generator.generate(&input, 8).await.unwrap();

        let ids: Vec<usize> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6, 7, 8]);
        for record in &records {
            assert_eq!(record.idea, format!("idea {}", record.id));
        }
    }
}
