//! # Quill Core
//!
//! The domain layer of Quill.
//! This crate holds the blog post schema, the error taxonomy, and the ports
//! that storage and caching backends implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{BlogPost, NewBlogPost};
pub use error::{DomainError, RepoError, ValidationError};
