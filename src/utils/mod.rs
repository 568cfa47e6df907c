//! Utility modules for the portal
//!
//! - **error**: error taxonomy and HTTP mapping
//! - **logging**: tracing subscriber setup
//! - **validation**: field validators for submitted input

pub mod error;
pub mod logging;
pub mod validation;

pub use validation::InputValidator;

