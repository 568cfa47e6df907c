//! Contact form and contact details

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject stored when the sender leaves it blank
pub const DEFAULT_SUBJECT: &str = "Konusuz";

pub const DEFAULT_CONTACT_EMAIL: &str = "iletisim@rteuhayat.org";
pub const DEFAULT_CONTACT_PHONE: &str = "+90 (464) 223 61 26";
pub const DEFAULT_CONTACT_ADDRESS: &str =
    "Recep Tayyip Erdoğan Üniversitesi, Zihni Derin Yerleşkesi, Merkez, Rize";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: DEFAULT_CONTACT_EMAIL.to_string(),
            phone: DEFAULT_CONTACT_PHONE.to_string(),
            address: DEFAULT_CONTACT_ADDRESS.to_string(),
        }
    }
}
