//! quill: terminal client for a Quill server.

mod args;
mod render;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use args::{Cli, Commands, CreateArgs};
use quill_client::{BlogClient, ClientError};
use quill_shared::{CategoryInput, CreateBlogPostRequest};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = BlogClient::new(&cli.base_url)
        .with_context(|| format!("invalid base URL {}", cli.base_url))?;

    match cli.command {
        Commands::List => {
            let posts = client.list_posts().await.context("failed to list posts")?;
            print!("{}", render::render_list(&posts));
        }
        Commands::Show { id } => match client.get_post(id).await.context("failed to load post")? {
            Some(post) => print!("{}", render::render_detail(&post)),
            None => {
                eprintln!("No post with id {id}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Create(args) => {
            let request = build_request(args)?;
            match client.create_post(&request).await {
                Ok(post) => {
                    println!("Published #{}: {}", post.id, post.title);
                }
                Err(ClientError::Validation(err)) => {
                    eprintln!("{}", render::render_validation_error(&err));
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e).context("failed to publish post"),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_request(args: CreateArgs) -> anyhow::Result<CreateBlogPostRequest> {
    let content = match (args.content, args.content_file) {
        (_, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (Some(content), None) => content,
        (None, None) => anyhow::bail!("either --content or --content-file is required"),
    };

    Ok(CreateBlogPostRequest {
        title: args.title,
        category: CategoryInput::Text(args.category),
        description: args.description,
        cover_image: args.cover_image,
        content,
    })
}
