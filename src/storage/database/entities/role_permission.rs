use crate::auth::access::{PermissionSet, Role};
use crate::utils::error::Result as PortalResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Permission set stored per role
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role_permissions")]
pub struct Model {
    /// Role token
    #[sea_orm(primary_key, auto_increment = false)]
    pub role: String,

    /// JSON array of capability tokens
    pub permissions: Json,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decode the stored set. Unknown tokens fail instead of being dropped.
    pub fn permission_set(&self) -> PortalResult<PermissionSet> {
        Ok(serde_json::from_value(self.permissions.clone())?)
    }

    pub fn to_domain(&self) -> PortalResult<crate::core::models::RolePermissions> {
        Ok(crate::core::models::RolePermissions {
            role: Role::from_str(&self.role)?,
            permissions: self.permission_set()?,
        })
    }
}
