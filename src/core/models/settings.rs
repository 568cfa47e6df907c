//! Key/value site settings

use serde::{Deserialize, Serialize};

/// Setting that opens the volunteer application form when set to `"true"`
pub const VOLUNTEER_APPLICATIONS_OPEN: &str = "VOLUNTEER_SYS_OPEN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingValue {
    pub value: String,
}
