//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Provider adapters classify failures into these variants; the HTTP layer
//! maps each variant to a status code exactly once.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Invalid OpenAI API key: {0}")]
    Authentication(String),

    #[error("OpenAI rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("OpenAI API error: {0}")]
    AiProvider(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// Coarse category used for logging and for the HTTP status mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Error::MalformedBody(_) => ErrorKind::MalformedBody,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::RateLimited(_) => ErrorKind::RateLimited,
            Error::AiProvider(_) | Error::Http(_) => ErrorKind::Upstream,
            Error::Io(_) | Error::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    InvalidRequest,
    MalformedBody,
    Authentication,
    RateLimited,
    Upstream,
    Internal,
}

pub type Result<T> = std::result::Result<T, Error>;
