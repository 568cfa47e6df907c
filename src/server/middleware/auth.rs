//! Session extraction
//!
//! Handlers that act on behalf of a user take a [`CurrentUser`] argument.
//! The bearer token is verified and the user, including their role, is read
//! from the store on every request.

use crate::auth::Actor;
use crate::auth::jwt::JwtHandler;
use crate::core::models::User;
use crate::server::AppState;
use crate::utils::error::PortalError;
use actix_web::dev::Payload;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;
use tracing::debug;

/// Authenticated user of the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// The gate's view of the caller
    pub fn actor(&self) -> Actor {
        self.0.actor()
    }
}

/// Bearer token from the `Authorization` header
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtHandler::extract_token_from_header)
        .map(str::to_string)
}

impl FromRequest for CurrentUser {
    type Error = PortalError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req.headers());

        Box::pin(async move {
            let state =
                state.ok_or_else(|| PortalError::internal("Application state not configured"))?;
            let Some(token) = token else {
                debug!("Request without bearer token");
                return Err(PortalError::unauthenticated("Authentication required"));
            };

            let user = state.auth.authenticate(&token).await?;
            Ok(CurrentUser(user))
        })
    }
}
