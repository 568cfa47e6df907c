//! Common test utilities for hayat-portal
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::TestPortal;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let portal = TestPortal::new().await;
//!     let admin = portal.actor(Role::Admin).await;
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{TestPortal, UserFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
