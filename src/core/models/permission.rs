//! Permission views for the admin panel

use crate::auth::access::{Capability, PermissionSet, Role};
use serde::{Deserialize, Serialize};

/// Stored permission set of one role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RolePermissions {
    pub role: Role,
    pub permissions: PermissionSet,
}

/// Capability token with its display label
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityInfo {
    pub token: Capability,
    pub label: &'static str,
    /// Roles from which this capability cannot be removed
    pub locked_for: Vec<Role>,
}

/// Replacement permission set submitted by an administrator
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionUpdate {
    pub permissions: PermissionSet,
}
