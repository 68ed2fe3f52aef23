//! Route table for the posts API.
//!
//! Paths use the `{param}` placeholder syntax understood by the server router.

/// `GET` - every post, newest first.
pub const LIST_POSTS: &str = "/posts";

/// `GET` - a single post by id.
pub const GET_POST: &str = "/posts/{id}";

/// `POST` - create a post.
pub const CREATE_POST: &str = "/posts";

/// `GET` - liveness probe.
pub const HEALTH: &str = "/health";

/// Substitute `{name}` placeholders in a route template.
///
/// Placeholders without a matching parameter are left untouched.
pub fn build_url(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |url, (key, value)| {
        url.replace(&format!("{{{key}}}"), value)
    })
}

/// Path of a single post.
pub fn post_path(id: i32) -> String {
    build_url(GET_POST, &[("id", &id.to_string())])
}
