//! Role/capability access gate
//!
//! Every mutating portal operation is decided here: either by capability
//! membership in the caller's role permission set, or by resource ownership.

mod capability;
mod permission_set;
mod role;
mod system;
mod types;

pub use capability::Capability;
pub use permission_set::PermissionSet;
pub use role::Role;
pub use system::AccessControl;
pub use types::{AccessDecision, Actor, DenialReason};
