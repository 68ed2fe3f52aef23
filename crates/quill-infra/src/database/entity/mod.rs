//! SeaORM entities.

pub mod blog_post;
