//! Error bodies returned by the API.

use serde::{Deserialize, Serialize};

use quill_core::ValidationError;

/// JSON error body: `{ "message": ..., "field": ... }`.
///
/// `field` is only present on validation failures that point at a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        Self {
            message: err.message,
            field: err.field,
        }
    }
}

impl From<ErrorResponse> for ValidationError {
    fn from(body: ErrorResponse) -> Self {
        Self {
            message: body.message,
            field: body.field,
        }
    }
}
