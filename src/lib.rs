//! Creos AI API - advertising idea and image generation service
//!
//! Turns a structured product brief into a list of creative ideas using a
//! text-completion provider, and renders one image per idea using an
//! image-generation provider. Both are exposed over a small HTTP API.

pub mod ai;
pub mod app;
pub mod error;
pub mod ideas;
pub mod images;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
