//! Integration tests for hayat-portal
//!
//! These tests drive the portal services against a real in-memory database.

pub mod access_tests;
pub mod config_tests;
pub mod invalidation_tests;
pub mod mutation_tests;
pub mod permission_tests;
pub mod report_tests;
pub mod team_tests;
pub mod volunteer_tests;
