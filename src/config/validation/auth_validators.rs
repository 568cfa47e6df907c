//! Authentication configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Secrets that ship in sample files and must never reach production
const PLACEHOLDER_SECRETS: &[&str] = &[
    "change-me-in-production",
    "your-secret-key",
    "secret",
    "changeme",
];

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.jwt_secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }

        if PLACEHOLDER_SECRETS
            .iter()
            .any(|p| self.jwt_secret.eq_ignore_ascii_case(p))
        {
            return Err("JWT secret must be changed from its placeholder value".to_string());
        }

        if self.jwt_secret.len() < 32 {
            return Err("JWT secret should be at least 32 characters long".to_string());
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err("JWT expiration should not exceed 30 days".to_string());
        }

        if self.password_min_length < 6 {
            return Err("Password minimum length must be at least 6".to_string());
        }

        if self.password_min_length > 128 {
            return Err("Password minimum length cannot exceed 128".to_string());
        }

        Ok(())
    }
}
