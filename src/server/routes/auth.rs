//! Registration, login and the caller's own account

use crate::auth::PermissionSet;
use crate::auth::jwt::TokenResponse;
use crate::core::models::{ImageUpdate, LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me))
            .route("/permissions", web::get().to(my_permissions)),
    )
    .route("/users/{id}/profile", web::put().to(update_profile))
    .route("/users/{id}/image", web::put().to(update_image));
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(flatten)]
    pub token: TokenResponse,
}

/// Caller's account and current permissions
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub permissions: PermissionSet,
}

async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let user = state.portal.register(&request).await?;
    Ok(created(user))
}

async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let (user, token) = state.portal.login(&request).await?;
    Ok(ok(LoginResponse { user, token }))
}

async fn me(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    let permissions = state.portal.my_permissions(&current.actor()).await?;
    Ok(ok(MeResponse {
        user: current.0,
        permissions,
    }))
}

async fn my_permissions(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.my_permissions(&current.actor()).await?))
}

async fn update_profile(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<ProfileUpdate>,
) -> Result<HttpResponse> {
    let user = state
        .portal
        .update_profile(&current.actor(), id.into_inner(), &input)
        .await?;
    Ok(ok(user))
}

async fn update_image(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<ImageUpdate>,
) -> Result<HttpResponse> {
    let user = state
        .portal
        .update_user_image(&current.actor(), id.into_inner(), &input)
        .await?;
    Ok(ok(user))
}
