//! Route cache for public listings
//!
//! Read paths cache their JSON payload under the page path that displays it.
//! Mutations invalidate every entry of the paths they affect.

use crate::config::CacheConfig;
use crate::utils::error::Result;
use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cached payloads keyed by `(path, item)`
#[derive(Clone)]
pub struct RouteCache {
    cache: Option<Cache<(String, String), Arc<serde_json::Value>>>,
}

impl std::fmt::Debug for RouteCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteCache")
            .field("enabled", &self.cache.is_some())
            .finish()
    }
}

impl RouteCache {
    pub fn new(config: &CacheConfig) -> Self {
        if !config.enabled {
            debug!("Route cache disabled");
            return Self { cache: None };
        }

        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.ttl_seconds))
            .support_invalidation_closures()
            .build();

        Self { cache: Some(cache) }
    }

    /// Cache that never stores anything
    pub fn disabled() -> Self {
        Self { cache: None }
    }

    /// Return the cached value for `(path, item)` or load and cache it
    pub async fn get_or_load<T, F, Fut>(&self, path: &str, item: &str, load: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let Some(cache) = &self.cache else {
            return load().await;
        };

        let key = (path.to_string(), item.to_string());
        if let Some(cached) = cache.get(&key).await {
            match serde_json::from_value(cached.as_ref().clone()) {
                Ok(value) => {
                    debug!("Route cache hit: {} {}", path, item);
                    return Ok(value);
                }
                Err(e) => warn!("Discarding unreadable cache entry {} {}: {}", path, item, e),
            }
        }

        let value = load().await?;
        cache
            .insert(key, Arc::new(serde_json::to_value(&value)?))
            .await;
        Ok(value)
    }

    /// Drop every cached entry shown on the given paths
    pub fn invalidate_paths(&self, paths: &[&str]) {
        let Some(cache) = &self.cache else {
            return;
        };

        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        debug!("Invalidating cached paths: {:?}", paths);

        if let Err(e) = cache.invalidate_entries_if(move |(path, _), _| paths.contains(path)) {
            warn!("Path invalidation failed, clearing route cache: {}", e);
            cache.invalidate_all();
        }
    }

    /// Whether an entry is currently cached
    pub async fn contains(&self, path: &str, item: &str) -> bool {
        match &self.cache {
            Some(cache) => cache
                .get(&(path.to_string(), item.to_string()))
                .await
                .is_some(),
            None => false,
        }
    }
}
