//! Error handling utilities
//!
//! This module provides the portal error type and the crate-wide `Result` alias.

pub mod error;

pub use error::*;
