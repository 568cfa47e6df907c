//! Storage layer for the portal
//!
//! This module provides data persistence and route caching.

/// Route cache module
pub mod cache;
/// Database storage module
pub mod database;

pub use cache::RouteCache;

use crate::config::{CacheConfig, StorageConfig};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer: the relational store and the route cache
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
    /// Cache of public listings
    pub cache: Arc<RouteCache>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig, cache: &CacheConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        info!("Storage layer initialized successfully");
        Ok(Self::from_parts(database, RouteCache::new(cache)))
    }

    /// Assemble from an existing database handle
    pub fn from_parts(database: Arc<database::Database>, cache: RouteCache) -> Self {
        Self {
            database,
            cache: Arc::new(cache),
        }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Get the database
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// Get the route cache
    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Health check for the storage backends
    pub async fn health_check(&self) -> Result<StorageHealthStatus> {
        let database = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        Ok(StorageHealthStatus {
            database,
            overall: database,
        })
    }
}

/// Storage health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Database health
    pub database: bool,
    /// Overall health
    pub overall: bool,
}

#[cfg(test)]
impl StorageLayer {
    /// Migrated in-memory SQLite store with an enabled route cache
    pub(crate) async fn in_memory() -> Self {
        let config = crate::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
        };
        let database = database::Database::new(&config)
            .await
            .expect("in-memory database");
        database.migrate().await.expect("migrations");
        Self::from_parts(Arc::new(database), RouteCache::new(&CacheConfig::default()))
    }
}
