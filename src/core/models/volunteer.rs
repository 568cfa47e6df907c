//! Volunteer applications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerQuestion {
    pub id: Uuid,
    pub text: String,
    pub position: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// Parse a stored token; unknown values read as pending
    pub fn from_db(value: &str) -> Self {
        match value {
            "APPROVED" => ApplicationStatus::Approved,
            "REJECTED" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }
}

/// Answer snapshot; keeps the question text as it was when answered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub team_name: Option<String>,
    pub answers: Vec<ApplicationAnswer>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Application form: the chosen team and answers keyed by question id
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationForm {
    pub team_id: Uuid,
    #[serde(default)]
    pub answers: BTreeMap<Uuid, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionActivation {
    pub is_active: bool,
}
