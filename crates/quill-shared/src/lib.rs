//! # Quill Shared
//!
//! The request/response contract between the Quill server and its clients.
//! Both sides run the same validation pipeline: clients to block bad
//! submissions early, the server as the authoritative check.

pub mod dto;
pub mod response;
pub mod routes;
pub mod validation;

pub use dto::{CategoryInput, CreateBlogPostRequest};
pub use quill_core::ValidationError;
pub use response::ErrorResponse;
pub use validation::{normalize_categories, validate_payload};
