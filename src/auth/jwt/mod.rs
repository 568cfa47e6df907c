//! JWT session tokens
//!
//! Tokens identify the actor only. The role is looked up per request so a
//! role change applies without reissuing tokens.

mod handler;
pub mod types;


pub use types::{Claims, JwtHandler, TokenResponse};
