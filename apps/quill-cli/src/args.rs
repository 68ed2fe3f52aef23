//! Command-line surface for `quill`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Read and publish posts on a Quill server", long_about = None)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "QUILL_BASE_URL", default_value = "http://127.0.0.1:8080")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every post, newest first
    List,
    /// Show one post in full
    Show {
        /// Post id
        id: i32,
    },
    /// Publish a new post
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    /// Comma separated, e.g. "Tech, Design, Life"
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long)]
    pub description: String,
    /// Cover image URL
    #[arg(long)]
    pub cover_image: String,
    /// Post body; paragraphs are separated by newlines
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,
    /// Read the post body from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}
