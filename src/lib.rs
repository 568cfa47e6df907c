//! # Hayat Portal
//!
//! Backend of a community portal: a wish board, events, projects, teams, a
//! volunteer visit calendar and contact channels, administered through a
//! role/capability access gate.
//!
//! ## Access model
//!
//! Every user has one [`Role`]. Each role maps to a [`PermissionSet`] of
//! [`Capability`] tokens stored in the database. A mutation passes the gate
//! when the caller's role grants the capability it needs, or, for owned
//! resources, when the caller owns the resource or is an administrator.
//!
//! ```rust,no_run
//! use hayat_portal::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/portal.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AccessControl, AccessDecision, Actor, AuthSystem, Capability, PermissionSet, Role};
pub use config::Config;
pub use server::HttpServer;
pub use services::PortalService;
pub use storage::StorageLayer;
pub use utils::error::{PortalError, Result};

/// Current version of the portal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the portal
pub const NAME: &str = env!("CARGO_PKG_NAME");
