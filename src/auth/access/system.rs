//! Access decision functions

use super::capability::Capability;
use super::permission_set::PermissionSet;
use super::role::Role;
use super::types::{AccessDecision, Actor, DenialReason};
use crate::config::AccessConfig;
use crate::utils::error::{PortalError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

/// Capabilities that can never be revoked from a role
const LOCKED_CAPABILITIES: &[(Role, Capability)] = &[(Role::Admin, Capability::ManageRoles)];

/// Stateless access gate.
///
/// Decisions are pure over the supplied permission set; loading that set is
/// the caller's job.
#[derive(Debug, Clone)]
pub struct AccessControl {
    config: AccessConfig,
}

impl AccessControl {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Whether a missing permission set should be created with its defaults
    pub fn seeds_defaults(&self) -> bool {
        self.config.seed_default_permissions
    }

    /// Allow iff `capability` is in the permission set of the actor's role.
    ///
    /// A missing set denies.
    pub fn authorize(
        &self,
        actor: &Actor,
        capability: Capability,
        permissions: Option<&PermissionSet>,
    ) -> AccessDecision {
        let decision = match permissions {
            Some(set) if set.contains(capability) => AccessDecision::Allow,
            Some(_) => AccessDecision::Deny(DenialReason::MissingCapability {
                role: actor.role,
                capability,
            }),
            None => AccessDecision::Deny(DenialReason::NoPermissionSet { role: actor.role }),
        };

        match &decision {
            AccessDecision::Allow => {
                debug!(actor = %actor.id, role = %actor.role, %capability, "access allowed")
            }
            AccessDecision::Deny(reason) => {
                warn!(actor = %actor.id, role = %actor.role, %capability, %reason, "access denied")
            }
        }

        decision
    }

    /// Allow iff the actor owns the resource or is an administrator
    pub fn authorize_owner_or_admin(&self, actor: &Actor, owner_id: Uuid) -> AccessDecision {
        if actor.id == owner_id || self.is_admin(actor) {
            return AccessDecision::Allow;
        }

        warn!(actor = %actor.id, role = %actor.role, owner = %owner_id, "ownership check denied");
        AccessDecision::Deny(DenialReason::NotOwner {
            actor_id: actor.id,
            owner_id,
        })
    }

    /// Whether the actor holds the administrator role
    pub fn is_admin(&self, actor: &Actor) -> bool {
        actor.role == Role::Admin
    }

    /// Reject a permission-set replacement that would drop a locked capability
    pub fn check_permission_update(&self, role: Role, proposed: &PermissionSet) -> Result<()> {
        for (locked_role, capability) in LOCKED_CAPABILITIES {
            if *locked_role == role && !proposed.contains(*capability) {
                warn!(%role, %capability, "attempt to revoke locked capability");
                return Err(PortalError::locked_capability(format!(
                    "{} cannot be removed from {}",
                    capability, role
                )));
            }
        }
        Ok(())
    }

    /// Locked capabilities for a role
    pub fn locked_capabilities(role: Role) -> Vec<Capability> {
        LOCKED_CAPABILITIES
            .iter()
            .filter(|(r, _)| *r == role)
            .map(|(_, c)| *c)
            .collect()
    }
}
