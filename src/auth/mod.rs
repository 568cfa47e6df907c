//! Authentication and authorization
//!
//! Sessions are bearer JWTs naming the user; roles and permission sets are
//! read from the store on every request and decided by [`access::AccessControl`].

pub mod access;
pub mod jwt;
pub mod password;
mod system;

pub use access::{AccessControl, AccessDecision, Actor, Capability, DenialReason, PermissionSet, Role};
pub use system::AuthSystem;
