//! Core configuration validators
//!
//! Validation for `PortalConfig`, `ServerConfig` and `CorsConfig`.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating portal configuration");

        self.server.validate()?;
        self.storage.validate()?;
        self.auth.validate()?;
        self.cache.validate()?;
        self.logging.validate()?;

        debug!("Portal configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        for origin in &self.allowed_origins {
            if origin == "*" {
                continue;
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!(
                    "CORS origin must start with http:// or https://: {}",
                    origin
                ));
            }
        }

        Ok(())
    }
}
