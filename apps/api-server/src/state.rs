//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state with the store the configuration asks for.
    pub async fn from_config(db_config: Option<&DatabaseConfig>, auto_migrate: bool) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match Self::postgres(config, auto_migrate).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to set up database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = (db_config, auto_migrate);
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    #[cfg(feature = "postgres")]
    async fn postgres(config: &DatabaseConfig, auto_migrate: bool) -> Result<Self, migration::DbErr> {
        use migration::{Migrator, MigratorTrait};
        use quill_infra::PostgresPostRepository;

        let conn = quill_infra::database::connect(config).await?;
        if auto_migrate {
            Migrator::up(&conn, None).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::new(Arc::new(PostgresPostRepository::new(conn))))
    }
}

