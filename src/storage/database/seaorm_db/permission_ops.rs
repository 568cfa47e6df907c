use crate::auth::access::{PermissionSet, Role};
use crate::core::models::RolePermissions;
use crate::utils::error::{PortalError, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role_permission};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Stored permission set for a role, if any
    pub async fn find_role_permissions(&self, role: Role) -> Result<Option<PermissionSet>> {
        let model = entities::RolePermission::find_by_id(role.as_str().to_string())
            .one(&self.db)
            .await?;

        model.map(|m| m.permission_set()).transpose()
    }

    /// Create or replace the permission set of a role
    pub async fn upsert_role_permissions(&self, role: Role, set: &PermissionSet) -> Result<()> {
        debug!("Storing {} permissions for role {}", set.len(), role);

        let model = role_permission::ActiveModel {
            role: Set(role.as_str().to_string()),
            permissions: Set(serde_json::to_value(set)?),
            updated_at: Set(chrono::Utc::now().into()),
        };

        entities::RolePermission::insert(model)
            .on_conflict(
                OnConflict::column(role_permission::Column::Role)
                    .update_columns([
                        role_permission::Column::Permissions,
                        role_permission::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Insert `set` only when the role has no row yet, then return the stored set.
    /// An existing row, including one written concurrently, always wins.
    pub async fn seed_role_permissions(&self, role: Role, set: &PermissionSet) -> Result<PermissionSet> {
        let model = role_permission::ActiveModel {
            role: Set(role.as_str().to_string()),
            permissions: Set(serde_json::to_value(set)?),
            updated_at: Set(chrono::Utc::now().into()),
        };

        let inserted = entities::RolePermission::insert(model)
            .on_conflict(
                OnConflict::column(role_permission::Column::Role)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        debug!("Seeded role {}: {} row(s) inserted", role, inserted);

        self.find_role_permissions(role).await?.ok_or_else(|| {
            PortalError::internal(format!("Permission set for {} missing after seeding", role))
        })
    }

    /// Every stored permission set
    pub async fn list_role_permissions(&self) -> Result<Vec<RolePermissions>> {
        entities::RolePermission::find()
            .order_by_asc(role_permission::Column::Role)
            .all(&self.db)
            .await?
            .iter()
            .map(role_permission::Model::to_domain)
            .collect()
    }
}
