//! Event models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create and update payload
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub cover_image: Option<String>,
}
