// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use super::config::{AppConfig, SessionConfig};

/// Store handle and configuration, injected into handlers as an `Extension`
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn session(&self) -> &SessionConfig {
        &self.config.session
    }
}
