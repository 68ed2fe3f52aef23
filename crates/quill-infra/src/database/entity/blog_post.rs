//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use quill_core::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: Vec<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub cover_image: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Insert model for a new post. `id` is left to the sequence.
    pub fn for_insert(post: NewBlogPost, date: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            category: Set(post.category),
            description: Set(post.description),
            date: Set(date.into()),
            cover_image: Set(post.cover_image),
            content: Set(post.content),
        }
    }
}

/// Conversion from SeaORM Model to domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            description: model.description,
            date: model.date.into(),
            cover_image: model.cover_image,
            content: model.content,
        }
    }
}
