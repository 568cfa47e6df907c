//! Access gate type definitions

use super::capability::Capability;
use super::role::Role;
use crate::utils::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Authenticated caller as seen by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User id
    pub id: Uuid,
    /// Role loaded from the store for this request
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenialReason),
}

/// Why an access check denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The role's permission set lacks the capability
    MissingCapability { role: Role, capability: Capability },
    /// No permission set is stored for the role
    NoPermissionSet { role: Role },
    /// The caller neither owns the resource nor is an administrator
    NotOwner { actor_id: Uuid, owner_id: Uuid },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::MissingCapability { role, capability } => {
                write!(f, "role {} lacks capability {}", role, capability)
            }
            DenialReason::NoPermissionSet { role } => {
                write!(f, "no permission set defined for role {}", role)
            }
            DenialReason::NotOwner { .. } => {
                write!(f, "resource belongs to another user")
            }
        }
    }
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Convert a deny into a user-visible rejection
    pub fn into_result(self) -> Result<()> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(reason) => Err(PortalError::unauthorized(reason.to_string())),
        }
    }
}
