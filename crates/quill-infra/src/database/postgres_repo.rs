//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

use quill_core::error::RepoError;
use quill_core::ports::PostRepository;
use quill_core::{BlogPost, NewBlogPost};

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// Post store backed by the `blog_posts` table.
///
/// Id assignment is delegated to the `serial` sequence, so concurrent inserts
/// never share an id.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let rows = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::Date)
            .order_by_desc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Listed blog posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
        let row = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        // timestamptz keeps microseconds
        let date = Utc::now().trunc_subsecs(6);
        let model = blog_post::ActiveModel::for_insert(post, date)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Blog post created");
        Ok(model.into())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}
