//! Configuration management for the portal
//!
//! This module handles loading, validation, and access to all portal configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PortalError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the portal
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Portal configuration
    pub portal: PortalConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortalError::Config(format!("Failed to read config file: {}", e)))?;

        let portal: PortalConfig = serde_yaml::from_str(&content)
            .map_err(|e| PortalError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { portal };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load configuration from a custom variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let portal = PortalConfig::from_env_with(lookup)?;
        let config = Self { portal };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise from the environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await
        } else {
            warn!(
                "Config file {:?} not found, falling back to environment variables",
                path
            );
            Self::from_env()
        }
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.portal.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.portal.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.portal.auth
    }

    /// Get access gate configuration
    pub fn access(&self) -> &AccessConfig {
        &self.portal.access
    }

    /// Get route cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.portal.cache
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.portal.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.portal
            .server
            .validate()
            .map_err(|e| PortalError::Config(format!("Server config error: {}", e)))?;

        self.portal
            .storage
            .validate()
            .map_err(|e| PortalError::Config(format!("Storage config error: {}", e)))?;

        self.portal
            .auth
            .validate()
            .map_err(|e| PortalError::Config(format!("Auth config error: {}", e)))?;

        self.portal
            .cache
            .validate()
            .map_err(|e| PortalError::Config(format!("Cache config error: {}", e)))?;

        self.portal
            .logging
            .validate()
            .map_err(|e| PortalError::Config(format!("Logging config error: {}", e)))?;

        if !self.portal.access.seed_default_permissions {
            warn!("Default permission seeding disabled: roles without a stored set are denied");
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.portal)
            .map_err(|e| PortalError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
