//! Plain-text views: the post list and the post detail pane.

use quill_core::{BlogPost, ValidationError};

const RULE: &str = "────────────────────────────────────────";

/// One card per post, newest first.
pub fn render_list(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return "No posts yet.\n".to_string();
    }

    posts.iter().map(card).collect()
}

fn card(post: &BlogPost) -> String {
    let mut lines = vec![format!(
        "#{:<4} {}  {}",
        post.id,
        post.date.format("%b %-d, %Y"),
        post.title
    )];
    if !post.category.is_empty() {
        lines.push(format!("      {}", categories(post)));
    }
    lines.push(format!("      {}", post.description));
    lines.join("\n") + "\n\n"
}

/// Full post with its content split into paragraphs.
pub fn render_detail(post: &BlogPost) -> String {
    let mut lines = vec![
        post.title.clone(),
        post.date.format("%B %-d, %Y").to_string(),
    ];
    if !post.category.is_empty() {
        lines.push(categories(post));
    }
    lines.push(format!("Cover: {}", post.cover_image));
    lines.push(RULE.to_string());
    lines.push(post.description.clone());
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    for paragraph in post.paragraphs() {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }
    out
}

pub fn render_validation_error(err: &ValidationError) -> String {
    match &err.field {
        Some(field) => format!("{field}: {}", err.message),
        None => err.message.clone(),
    }
}

fn categories(post: &BlogPost) -> String {
    post.category
        .iter()
        .map(|c| format!("[{c}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
