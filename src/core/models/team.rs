//! Team, team role and membership models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Teams whose name contains one of these come first, in this order
pub const TEAM_PRIORITY: &[&str] = &[
    "Yönetim Denetim",
    "Yönetim & Denetim",
    "Hastane Ziyaretleri",
    "Okul Ziyaretleri",
    "Onur Üyeleri",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRole {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role_id: Uuid,
    pub user_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Team with its member count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    #[serde(flatten)]
    pub team: Team,
    pub member_count: u64,
}

/// Everything the teams page shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsOverview {
    pub teams: Vec<TeamSummary>,
    pub roles: Vec<TeamRole>,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberAssignment {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role_id: Uuid,
}

/// Turkish alphabetical order, with the Latin letters it lacks slotted in
const ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

/// Sort key of one character: non-letters before letters, case folded the Turkish way
fn collation_key(c: char) -> (u8, u32) {
    let folded = match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    };
    match ALPHABET.chars().position(|letter| letter == folded) {
        Some(index) => (1, index as u32),
        None => (0, folded as u32),
    }
}

/// Compare names in Turkish alphabetical order, ignoring case
pub fn collate_turkish(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key))
        .then_with(|| a.cmp(b))
}

fn priority(name: &str) -> Option<usize> {
    TEAM_PRIORITY.iter().position(|key| name.contains(key))
}

/// Prioritised teams first, then everything else by name
pub fn compare_team_names(a: &str, b: &str) -> Ordering {
    match (priority(a), priority(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate_turkish(a, b),
    }
}

/// Sort teams for display
pub fn sort_teams(teams: &mut [TeamSummary]) {
    teams.sort_by(|a, b| compare_team_names(&a.team.name, &b.team.name));
}
