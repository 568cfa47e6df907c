//! Role permission administration

use super::{PortalService, paths};
use crate::auth::{AccessControl, Actor, Capability, PermissionSet, Role};
use crate::core::models::{CapabilityInfo, RolePermissions};
use crate::utils::error::Result;
use tracing::info;

impl PortalService {
    /// Capability tokens and labels for the admin panel
    pub fn capabilities(&self) -> Vec<CapabilityInfo> {
        Capability::ALL
            .into_iter()
            .map(|token| CapabilityInfo {
                token,
                label: token.label(),
                locked_for: Role::ALL
                    .into_iter()
                    .filter(|role| AccessControl::locked_capabilities(*role).contains(&token))
                    .collect(),
            })
            .collect()
    }

    /// Capabilities of the caller's current role
    pub async fn my_permissions(&self, actor: &Actor) -> Result<PermissionSet> {
        Ok(self
            .auth
            .permissions_for(actor.role)
            .await?
            .unwrap_or_default())
    }

    /// Every role's permission set
    pub async fn role_permissions(&self, actor: &Actor) -> Result<Vec<RolePermissions>> {
        self.auth.require(actor, Capability::ManageRoles).await?;

        let mut all = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            if let Some(permissions) = self.auth.permissions_for(role).await? {
                all.push(RolePermissions { role, permissions });
            }
        }
        Ok(all)
    }

    /// Replace a role's permission set. Locked capabilities cannot be removed.
    pub async fn update_role_permissions(
        &self,
        actor: &Actor,
        role: Role,
        permissions: &PermissionSet,
    ) -> Result<RolePermissions> {
        self.auth.require(actor, Capability::ManageRoles).await?;
        self.auth.access().check_permission_update(role, permissions)?;

        self.storage
            .db()
            .upsert_role_permissions(role, permissions)
            .await?;
        info!(actor = %actor.id, %role, count = permissions.len(), "role permissions updated");

        self.invalidate(&[paths::ADMIN]);
        Ok(RolePermissions {
            role,
            permissions: permissions.clone(),
        })
    }
}
