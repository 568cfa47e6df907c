//! Top-level portal configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main portal configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Access gate configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Route cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Build configuration from process environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults. Values that fail to parse are
    /// reported as configuration errors.
    pub fn from_env_with<F>(lookup: F) -> crate::utils::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PORTAL_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORTAL_PORT") {
            config.server.port = parse_var("PORTAL_PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &max)?;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Some(expiration) = lookup("JWT_EXPIRATION") {
            config.auth.jwt_expiration = parse_var("JWT_EXPIRATION", &expiration)?;
        }
        if let Some(seed) = lookup("PORTAL_SEED_PERMISSIONS") {
            config.access.seed_default_permissions = parse_var("PORTAL_SEED_PERMISSIONS", &seed)?;
        }
        if let Some(ttl) = lookup("PORTAL_CACHE_TTL") {
            config.cache.ttl_seconds = parse_var("PORTAL_CACHE_TTL", &ttl)?;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> crate::utils::error::Result<T> {
    value.trim().parse().map_err(|_| {
        crate::utils::error::PortalError::Config(format!("Invalid value for {}: {}", key, value))
    })
}
