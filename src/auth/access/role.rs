//! Portal roles

use crate::utils::error::PortalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of portal roles
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Portal administrator
    Admin,
    /// Association member with partial management rights
    Member,
    /// Registered visitor, given at registration
    #[default]
    User,
}

impl Role {
    /// Every role, in privilege order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Member, Role::User];

    /// Wire and storage token
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MEMBER" => Ok(Role::Member),
            "USER" => Ok(Role::User),
            other => Err(PortalError::validation(format!("Unknown role: {}", other))),
        }
    }
}
