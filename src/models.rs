//! Data models and structures
//!
//! Defines the request/response shapes of the HTTP API and the service
//! configuration loaded from the environment.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_NUM_IDEAS: i64 = 50;
pub const DEFAULT_NUM_IMAGES: i64 = 30;

/// Value shipped in the sample `.env`; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-openai-key-here";

/// Structured advertising brief describing a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductBrief {
    pub product_name: String,
    pub core_problem: String,
    pub primary_benefit: String,
    pub visual_elements: String,
    pub target_audience: String,
    pub unique_mechanism: String,
    pub emotional_benefit: String,
    pub brand_personality: String,
    pub headline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaRequest {
    pub product_data: ProductBrief,
    #[serde(default = "default_num_ideas")]
    pub num_ideas: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    pub ideas: Vec<String>,
    #[serde(default = "default_num_images")]
    pub num_images: i64,
}

fn default_num_ideas() -> i64 {
    DEFAULT_NUM_IDEAS
}

fn default_num_images() -> i64 {
    DEFAULT_NUM_IMAGES
}

/// One rendered image for one idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    /// 1-based position of the idea among the attempted ideas.
    pub id: usize,
    pub idea: String,
    pub url: String,
    pub variants: ImageVariants,
}

impl ImageRecord {
    pub fn new(id: usize, idea: String, url: String) -> Self {
        Self {
            id,
            idea,
            variants: ImageVariants::uniform(&url),
            url,
        }
    }
}

/// Aspect-ratio keyed references. Only one image is requested from the
/// provider, so every ratio points at the same reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageVariants {
    #[serde(rename = "1:1")]
    pub square: String,
    #[serde(rename = "9:16")]
    pub portrait: String,
    #[serde(rename = "16:9")]
    pub landscape: String,
}

impl ImageVariants {
    pub fn uniform(url: &str) -> Self {
        Self {
            square: url.to_string(),
            portrait: url.to_string(),
            landscape: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<ImageRecord>,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Caps applied to caller-supplied counts.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_ideas: usize,
    pub max_images: usize,
    pub image_concurrency: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_ideas: 100,
            max_images: 30,
            image_concurrency: 1,
        }
    }
}

impl Limits {
    pub fn idea_count(&self, requested: i64) -> crate::Result<usize> {
        resolve_count("num_ideas", requested, self.max_ideas)
    }

    pub fn image_count(&self, requested: i64) -> crate::Result<usize> {
        resolve_count("num_images", requested, self.max_images)
    }
}

/// Non-positive counts are rejected; counts above `max` are clamped to it.
fn resolve_count(field: &str, requested: i64, max: usize) -> crate::Result<usize> {
    if requested < 1 {
        return Err(crate::Error::InvalidRequest(format!(
            "{} must be a positive integer, got {}",
            field, requested
        )));
    }

    let requested = usize::try_from(requested).unwrap_or(usize::MAX);
    if requested > max {
        tracing::warn!("{} = {} exceeds the limit, clamping to {}", field, requested, max);
    }
    Ok(requested.min(max))
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub image_model: String,
    pub image_size: String,
    pub image_quality: String,
    pub request_timeout: Duration,
    pub limits: Limits,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let number_or = |key: &str, default: u64| -> crate::Result<u64> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                None => Ok(default),
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(0) | Err(_) => Err(crate::Error::Configuration(format!(
                        "{} must be a positive integer, got '{}'",
                        key, raw
                    ))),
                    Ok(value) => Ok(value),
                },
            }
        };

        let defaults = Limits::default();
        let limits = Limits {
            max_ideas: number_or("MAX_IDEAS", defaults.max_ideas as u64)? as usize,
            max_images: number_or("MAX_IMAGES", defaults.max_images as u64)? as usize,
            image_concurrency: number_or("IMAGE_CONCURRENCY", defaults.image_concurrency as u64)?
                as usize,
        };

        let bind_raw = string_or("BIND_ADDR", "0.0.0.0:8000");
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
            crate::Error::Configuration(format!("Invalid BIND_ADDR '{}': {}", bind_raw, e))
        })?;

        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY"),
            openai_base_url: string_or("OPENAI_BASE_URL", "https://api.openai.com")
                .trim_end_matches('/')
                .to_string(),
            chat_model: string_or("CHAT_MODEL", "gpt-3.5-turbo"),
            image_model: string_or("IMAGE_MODEL", "dall-e-3"),
            image_size: string_or("IMAGE_SIZE", "1024x1024"),
            image_quality: string_or("IMAGE_QUALITY", "standard"),
            request_timeout: Duration::from_secs(number_or("OPENAI_TIMEOUT_SECS", 60)?),
            limits,
            bind_addr,
        })
    }

    /// The API key, unless it is missing, blank, or the placeholder value.
    pub fn usable_api_key(&self) -> Option<&str> {
        usable_api_key(self.openai_api_key.as_deref())
    }
}

pub(crate) fn usable_api_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
}
