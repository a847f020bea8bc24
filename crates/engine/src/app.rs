//! Application state and composition.

use std::sync::Arc;

use roster_domain::Validator;

use crate::infrastructure::{
    config::{EngineConfig, StoreKind},
    memory::InMemoryPlayerRepo,
    ports::{PlayerRepo, RepoError},
    sqlite::SqlitePlayerRepo,
};
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: use_cases::ManagementUseCases,
}

impl App {
    /// Create a new App around an already constructed store.
    pub fn new(player_repo: Arc<dyn PlayerRepo>, config: &EngineConfig) -> Self {
        let player = use_cases::management::PlayerManagement::new(
            player_repo,
            Validator::new(config.rules),
            config.default_page_size,
        );

        Self {
            use_cases: UseCases {
                management: use_cases::ManagementUseCases::new(player),
            },
        }
    }

    /// Open the store the configuration names and wire the application around it.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let player_repo: Arc<dyn PlayerRepo> = match config.store {
            StoreKind::Sqlite => {
                tracing::info!(path = %config.player_db, "Opening SQLite player store");
                Arc::new(SqlitePlayerRepo::new(&config.player_db).await?)
            }
            StoreKind::Memory => {
                tracing::info!("Using in-memory player store");
                Arc::new(InMemoryPlayerRepo::new())
            }
        };

        Ok(Self::new(player_repo, config))
    }
}
