//! Access gate configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Access gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Create a role's permission set with its defaults on first access.
    /// When disabled a missing set denies every capability.
    #[serde(default = "default_true")]
    pub seed_default_permissions: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            seed_default_permissions: true,
        }
    }
}
