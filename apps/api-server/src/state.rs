//! Application state - shared across all handlers.

use std::sync::Arc;

use murmur_core::ports::PostRepository;
use murmur_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use murmur_infra::PostgresPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub max_page_limit: Option<u64>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    ///
    /// Falls back to in-memory storage when no database is configured or the
    /// connection fails.
    pub async fn new(config: &AppConfig) -> Self {
        let posts = Self::init_repository(config).await;

        tracing::info!(storage = posts.backend(), "Application state initialized");

        Self::with_repository(posts, config.max_page_limit)
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>, max_page_limit: Option<u64>) -> Self {
        Self {
            posts,
            max_page_limit,
        }
    }

    #[cfg(feature = "postgres")]
    async fn init_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match murmur_infra::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn init_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
