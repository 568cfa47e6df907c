//! Wish board models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a wish on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishStatus {
    #[default]
    Pending,
    InProcess,
    Completed,
}

impl WishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WishStatus::Pending => "PENDING",
            WishStatus::InProcess => "IN_PROCESS",
            WishStatus::Completed => "COMPLETED",
        }
    }

    /// Parse a stored token; unknown values read as pending
    pub fn from_db(value: &str) -> Self {
        match value {
            "IN_PROCESS" => WishStatus::InProcess,
            "COMPLETED" => WishStatus::Completed,
            _ => WishStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wish {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub status: WishStatus,
    /// Creator of the wish
    pub user_id: Uuid,
    /// Creator's display name, when loaded with the wish
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWish {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WishStatusUpdate {
    pub status: WishStatus,
}
