//! Capability tokens granted to roles

use crate::utils::error::PortalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of management capabilities.
///
/// Serialized as the upper-case token (`MANAGE_WISHES`). Any other token is
/// rejected when parsing or deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ManageWishes,
    ManageEvents,
    ManageProjects,
    ManageTeams,
    ManageSupport,
    ManageFeedback,
    ManageMessages,
    ManageReports,
    ManageUsers,
    ManageRoles,
    ManageSettings,
}

impl Capability {
    /// Every capability, in display order
    pub const ALL: [Capability; 11] = [
        Capability::ManageWishes,
        Capability::ManageEvents,
        Capability::ManageProjects,
        Capability::ManageTeams,
        Capability::ManageSupport,
        Capability::ManageFeedback,
        Capability::ManageMessages,
        Capability::ManageReports,
        Capability::ManageUsers,
        Capability::ManageRoles,
        Capability::ManageSettings,
    ];

    /// Wire and storage token
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageWishes => "MANAGE_WISHES",
            Capability::ManageEvents => "MANAGE_EVENTS",
            Capability::ManageProjects => "MANAGE_PROJECTS",
            Capability::ManageTeams => "MANAGE_TEAMS",
            Capability::ManageSupport => "MANAGE_SUPPORT",
            Capability::ManageFeedback => "MANAGE_FEEDBACK",
            Capability::ManageMessages => "MANAGE_MESSAGES",
            Capability::ManageReports => "MANAGE_REPORTS",
            Capability::ManageUsers => "MANAGE_USERS",
            Capability::ManageRoles => "MANAGE_ROLES",
            Capability::ManageSettings => "MANAGE_SETTINGS",
        }
    }

    /// Label shown in the admin panel
    pub fn label(&self) -> &'static str {
        match self {
            Capability::ManageWishes => "Dilek Yönetimi",
            Capability::ManageEvents => "Etkinlikler",
            Capability::ManageProjects => "Projeler",
            Capability::ManageTeams => "Takımlar",
            Capability::ManageSupport => "Destek Ol",
            Capability::ManageFeedback => "Geri Bildirimler",
            Capability::ManageMessages => "Mesajlar",
            Capability::ManageReports => "Raporlar",
            Capability::ManageUsers => "Kullanıcılar",
            Capability::ManageRoles => "Rol ve Yetkiler",
            Capability::ManageSettings => "Ayarlar",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PortalError::validation(format!("Unknown capability: {}", s)))
    }
}
