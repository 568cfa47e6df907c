//! Request extractors and middleware helpers

mod auth;

pub use auth::{CurrentUser, bearer_token};
