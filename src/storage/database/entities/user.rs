use crate::auth::access::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique, lower-case)
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash
    pub password_hash: String,

    /// Role token (`ADMIN`, `MEMBER`, `USER`)
    pub role: String,

    /// Profile title
    pub title: Option<String>,

    /// Profile biography
    pub bio: Option<String>,

    /// Avatar URL
    pub image: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wish::Entity")]
    Wishes,
    #[sea_orm(has_many = "super::visit_schedule::Entity")]
    Visits,
    #[sea_orm(has_many = "super::team_member::Entity")]
    Memberships,
}

impl Related<super::wish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishes.def()
    }
}

impl Related<super::visit_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visits.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parsed role; an unreadable stored role is treated as the least privileged one
    pub fn role(&self) -> Role {
        Role::from_str(&self.role).unwrap_or_else(|_| {
            warn!("User {} has unknown role {:?}", self.id, self.role);
            Role::User
        })
    }

    /// Convert to the domain user, dropping the password hash
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role(),
            title: self.title.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
            created_at: self.created_at.to_utc(),
        }
    }
}
