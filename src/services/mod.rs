//! Portal services
//!
//! Each mutation validates its input, passes the access gate, writes to the
//! store and then invalidates the cached pages that show the mutated data.
//! Public listings are served through the route cache.

mod contact;
mod content;
mod feedback;
mod permissions;
mod reports;
mod settings;
mod teams;
mod users;
mod visits;
mod volunteer;

use crate::auth::AuthSystem;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// Page paths whose cached content depends on the data a mutation touches
pub mod paths {
    pub const HOME: &str = "/";
    pub const WISHES: &str = "/wishes";
    pub const ADMIN: &str = "/admin";
    pub const EVENTS: &str = "/events";
    pub const PROJECTS: &str = "/projects";
    pub const TEAMS: &str = "/teams";
    pub const CONTACT: &str = "/contact";
    pub const CALENDAR: &str = "/calendar";
    pub const PROFILE: &str = "/profile";
    pub const REPORTS: &str = "/reports";
}

/// Entry point for every portal operation
#[derive(Debug, Clone)]
pub struct PortalService {
    pub(crate) auth: Arc<AuthSystem>,
    pub(crate) storage: Arc<StorageLayer>,
}

impl PortalService {
    pub fn new(auth: Arc<AuthSystem>, storage: Arc<StorageLayer>) -> Self {
        Self { auth, storage }
    }

    pub fn auth(&self) -> &AuthSystem {
        &self.auth
    }

    /// Fire the invalidation signal after a successful mutation
    fn invalidate(&self, affected: &[&str]) {
        self.storage.cache().invalidate_paths(affected);
    }
}
