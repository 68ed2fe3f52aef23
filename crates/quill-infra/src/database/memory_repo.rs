//! In-memory post repository - used when no database is configured, and in tests.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use quill_core::error::RepoError;
use quill_core::ports::PostRepository;
use quill_core::{BlogPost, NewBlogPost};

#[derive(Default)]
struct Table {
    rows: Vec<BlogPost>,
    last_id: i32,
}

/// Post store held in process memory.
///
/// Id assignment and insertion happen under a single write lock.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let table = self.table.read().await;
        let mut posts = table.rows.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("blog post id sequence exhausted".to_string()))?;

        let stored = BlogPost::from_new(id, Utc::now().trunc_subsecs(6), post);
        table.last_id = id;
        table.rows.push(stored.clone());

        tracing::debug!(post_id = id, "Blog post created (in-memory)");
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}
