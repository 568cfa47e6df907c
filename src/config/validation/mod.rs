//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Portal and server validators
//! - `storage_validators`: Database validators
//! - `auth_validators`: Authentication validators
//! - `cache_validators`: Route cache and logging validators
//! - `tests`: Test suite for all validators

mod auth_validators;
mod cache_validators;
mod config_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
