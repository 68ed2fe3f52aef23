use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use quill_core::BlogPost;
use quill_core::ports::Cache;
use quill_infra::InMemoryCache;
use quill_shared::routes::{self, CREATE_POST, LIST_POSTS};
use quill_shared::{CreateBlogPostRequest, ErrorResponse};

use crate::error::ClientError;

/// HTTP client for the posts API.
///
/// Cache keys are route paths (`/posts`, `/posts/3`), so a key names exactly
/// the resource it holds.
#[derive(Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<dyn Cache>,
}

impl BlogClient {
    /// Client with a fresh in-memory cache.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_cache(base_url, Arc::new(InMemoryCache::new()))
    }

    pub fn with_cache(base_url: &str, cache: Arc<dyn Cache>) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ClientError> {
        if let Some(posts) = self.cached(LIST_POSTS).await {
            return Ok(posts);
        }

        let response = self.http.get(self.url(LIST_POSTS)).send().await?;
        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        let posts: Vec<BlogPost> = response.json().await?;
        self.store(LIST_POSTS, &posts).await?;
        Ok(posts)
    }

    /// A single post, or `None` when the server answers 404.
    pub async fn get_post(&self, id: i32) -> Result<Option<BlogPost>, ClientError> {
        let path = routes::post_path(id);
        if let Some(post) = self.cached(&path).await {
            return Ok(Some(post));
        }

        let response = self.http.get(self.url(&path)).send().await?;
        match response.status() {
            StatusCode::OK => {
                let post: BlogPost = response.json().await?;
                self.store(&path, &post).await?;
                Ok(Some(post))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(status_error(response).await),
        }
    }

    /// Validate locally, then create the post.
    ///
    /// On success the cached list is dropped and the new post is cached under its own route.
    pub async fn create_post(&self, request: &CreateBlogPostRequest) -> Result<BlogPost, ClientError> {
        request.validate()?;

        let response = self.http.post(self.url(CREATE_POST)).json(request).send().await?;
        match response.status() {
            StatusCode::CREATED => {
                let post: BlogPost = response.json().await?;
                self.cache.delete(LIST_POSTS).await;
                self.store(&routes::post_path(post.id), &post).await?;
                tracing::debug!(post_id = post.id, "Blog post created");
                Ok(post)
            }
            StatusCode::BAD_REQUEST => {
                let body: ErrorResponse = response.json().await?;
                Err(ClientError::Validation(body.into()))
            }
            _ => Err(status_error(response).await),
        }
    }

    /// Drop every cached response.
    pub async fn invalidate_all(&self) {
        self.cache.clear().await;
    }

    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ClientError> {
        let raw = serde_json::to_string(value)?;
        self.cache.set(key, &raw).await;
        Ok(())
    }
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    ClientError::Status { status, message }
}
