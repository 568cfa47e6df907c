//! Volunteer visit calendar

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitSchedule {
    pub id: Uuid,
    /// Volunteer who booked the visit
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub date: NaiveDate,
    pub experience: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVisit {
    pub date: NaiveDate,
    pub experience: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Inclusive date window
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VisitRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
