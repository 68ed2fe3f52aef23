//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

use quill_core::{NewBlogPost, ValidationError};

use crate::validation::validate_payload;

/// Categories as a form supplies them: free text or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryInput {
    /// Comma separated, e.g. `"Tech, Design"`.
    Text(String),
    List(Vec<String>),
}

impl Default for CategoryInput {
    fn default() -> Self {
        CategoryInput::List(Vec::new())
    }
}

impl From<&str> for CategoryInput {
    fn from(text: &str) -> Self {
        CategoryInput::Text(text.to_string())
    }
}

impl From<Vec<String>> for CategoryInput {
    fn from(list: Vec<String>) -> Self {
        CategoryInput::List(list)
    }
}

/// Request to create a blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub category: CategoryInput,
    pub description: String,
    pub cover_image: String,
    pub content: String,
}

impl CreateBlogPostRequest {
    /// Run the same checks the server applies, without a round trip.
    pub fn validate(&self) -> Result<NewBlogPost, ValidationError> {
        let payload = serde_json::to_value(self)
            .map_err(|e| ValidationError::body(format!("request could not be encoded: {e}")))?;
        validate_payload(&payload)
    }
}

impl From<NewBlogPost> for CreateBlogPostRequest {
    fn from(post: NewBlogPost) -> Self {
        Self {
            title: post.title,
            category: CategoryInput::List(post.category),
            description: post.description,
            cover_image: post.cover_image,
            content: post.content,
        }
    }
}
