//! Per-role permission sets

use super::capability::Capability;
use super::role::Role;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capabilities granted to one role.
///
/// Serializes as a JSON array of capability tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Capability>);

impl PermissionSet {
    /// Empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Set seeded for `role` on first access
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Admin => Capability::ALL.into_iter().collect(),
            Role::Member => [
                Capability::ManageWishes,
                Capability::ManageEvents,
                Capability::ManageProjects,
            ]
            .into_iter()
            .collect(),
            Role::User => Self::new(),
        }
    }

    /// Parse from stored or submitted tokens; unknown tokens are an error
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        tokens
            .iter()
            .map(|t| t.as_ref().parse::<Capability>())
            .collect::<Result<BTreeSet<_>>>()
            .map(Self)
    }

    /// Tokens in stable order
    pub fn to_tokens(&self) -> Vec<String> {
        self.0.iter().map(|c| c.as_str().to_string()).collect()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn insert(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    pub fn remove(&mut self, capability: Capability) -> bool {
        self.0.remove(&capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
