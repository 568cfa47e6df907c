//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::services::PortalService;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into each worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Portal configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Authentication system and access gate
    pub auth: Arc<AuthSystem>,
    /// Portal operations
    pub portal: Arc<PortalService>,
}

impl AppState {
    /// Wire up state around an already connected storage layer
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let storage = Arc::new(storage);
        let auth = Arc::new(AuthSystem::new(
            &config.portal.auth,
            &config.portal.access,
            storage.clone(),
        ));
        let portal = Arc::new(PortalService::new(auth.clone(), storage.clone()));

        Self {
            config: Arc::new(config),
            storage,
            auth,
            portal,
        }
    }

    /// Connect to the configured store, run migrations and build the state
    pub async fn connect(config: Config) -> Result<Self> {
        let storage = StorageLayer::new(config.storage(), config.cache()).await?;
        storage.migrate().await?;
        info!("Application state ready");
        Ok(Self::new(config, storage))
    }

    /// Get portal configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
