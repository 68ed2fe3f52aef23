use async_trait::async_trait;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Blog post store.
///
/// Posts are append-only: there is no update or delete.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `date` first. Posts sharing a timestamp are ordered by `id` descending.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a new post, assigning the next id and the current timestamp.
    ///
    /// Concurrent calls must never receive the same id.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
