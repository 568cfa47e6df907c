//! Core domain types of the portal

pub mod models;
