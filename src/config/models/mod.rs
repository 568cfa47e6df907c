//! Configuration data models
//!
//! This module defines all configuration structures used throughout the portal.

pub mod access;
pub mod auth;
pub mod cache;
pub mod logging;
pub mod portal;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use access::*;
pub use auth::*;
pub use cache::*;
pub use logging::*;
pub use portal::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_database_url() -> String {
    "sqlite://data/portal.db?mode=rwc".to_string()
}

/// Default JWT lifetime in seconds
pub fn default_jwt_expiration() -> u64 {
    86400 // 1 day
}

pub fn default_password_min_length() -> usize {
    8
}

pub fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

pub fn default_cache_max_entries() -> u64 {
    256
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub fn default_true() -> bool {
    true
}
