//! Core data models for the portal
//!
//! Domain records returned by the store and the input payloads accepted by
//! the mutation services.

pub mod contact;
pub mod event;
pub mod feedback;
pub mod permission;
pub mod project;
pub mod report;
pub mod settings;
pub mod team;
pub mod user;
pub mod visit;
pub mod volunteer;
pub mod wish;

pub use contact::*;
pub use event::*;
pub use feedback::*;
pub use permission::*;
pub use project::*;
pub use report::*;
pub use settings::*;
pub use team::*;
pub use user::*;
pub use visit::*;
pub use volunteer::*;
pub use wish::*;
