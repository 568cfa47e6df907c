//! User models

use crate::auth::access::{Actor, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered portal user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The gate's view of this user
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}

/// Registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Self-service profile fields
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// New avatar location
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpdate {
    pub image_url: String,
}

/// Role change issued by an administrator
#[derive(Debug, Clone, Deserialize)]
pub struct RoleChange {
    pub role: Role,
}
