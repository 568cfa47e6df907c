//! Team reports and their tags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Where the document is hosted
    pub file_url: String,
    pub uploaded_by: Option<Uuid>,
    pub uploader_name: Option<String>,
    pub uploader_image: Option<String>,
    pub tags: Vec<Tag>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTag {
    pub name: String,
}

/// Report registered against an already hosted document
#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}
