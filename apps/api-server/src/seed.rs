//! Boot-time seeding of example posts.

use quill_core::NewBlogPost;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// The example posts inserted into an empty store.
pub fn example_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost {
            title: "Future of Fintech".to_string(),
            category: vec!["FINANCE".to_string(), "TECH".to_string()],
            description: "Exploring how AI and blockchain are reshaping financial services"
                .to_string(),
            cover_image: "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg"
                .to_string(),
            content: "The intersection of finance and technology has never been more vibrant. As we look towards 2024, the role of the Chartered Accountant is evolving from mere bookkeeping to strategic financial analysis powered by AI. \n\nThe Rise of Automated Accounting\nAutomation is no longer a buzzword; it's a reality. Routine tasks like data entry, reconciliation, and payroll processing are being automated at an unprecedented pace."
                .to_string(),
        },
        NewBlogPost {
            title: "Ace Your CA Finals".to_string(),
            category: vec!["CAREER".to_string(), "STUDY".to_string()],
            description: "Strategies and study plans to help you clear your exams in the first attempt without burning out."
                .to_string(),
            cover_image: "https://images.pexels.com/photos/301920/pexels-photo-301920.jpeg"
                .to_string(),
            content: "Passing the CA Final exams is a monumental achievement. It requires dedication, strategy, and resilience. Here are some top tips to help you succeed..."
                .to_string(),
        },
        NewBlogPost {
            title: "Understanding Tax Reforms".to_string(),
            category: vec!["REGULATIONS".to_string()],
            description: "A comprehensive breakdown of the new tax laws introduced this fiscal year and their impact on businesses."
                .to_string(),
            cover_image: "https://images.pexels.com/photos/6863255/pexels-photo-6863255.jpeg"
                .to_string(),
            content: "Tax regulations are constantly evolving. Keeping up with the latest changes is crucial for any finance professional..."
                .to_string(),
        },
    ]
}

/// Insert the example posts if the store has none. Returns how many were inserted.
pub async fn seed_if_empty(posts: &dyn PostRepository) -> Result<usize, RepoError> {
    if posts.count().await? > 0 {
        tracing::debug!("Store already has posts, skipping seed");
        return Ok(0);
    }

    let examples = example_posts();
    let inserted = examples.len();
    for post in examples {
        posts.create(post).await?;
    }

    tracing::info!(count = inserted, "Database seeded successfully");
    Ok(inserted)
}
