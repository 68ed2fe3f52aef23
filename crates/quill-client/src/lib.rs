//! # Quill Client
//!
//! Typed wrappers over the posts API. Responses are cached per route and the
//! cache is invalidated when a mutation succeeds.

mod client;
mod error;

pub use client::BlogClient;
pub use error::ClientError;
