//! Client error types.

use quill_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Rejected locally before sending, or by the server with a 400.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not encode cache entry: {0}")]
    Encode(#[from] serde_json::Error),
}
