use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post entity - one published article.
///
/// `id` and `date` are assigned by the store when the post is created and
/// never change afterwards. There is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub date: DateTime<Utc>,
    pub cover_image: String,
    pub content: String,
}

impl BlogPost {
    /// Assemble a stored post from its insert shape plus the server-assigned fields.
    pub fn from_new(id: i32, date: DateTime<Utc>, new: NewBlogPost) -> Self {
        Self {
            id,
            title: new.title,
            category: new.category,
            description: new.description,
            date,
            cover_image: new.cover_image,
            content: new.content,
        }
    }

    /// Content split into paragraphs, one per non-blank line.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
    }
}

/// Insert shape of a post: everything a caller supplies, without `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub cover_image: String,
    pub content: String,
}
