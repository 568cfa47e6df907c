//! Teams page and team administration

use crate::core::models::{MemberAssignment, NamedInput};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .route("", web::get().to(overview))
            .route("", web::post().to(create_team))
            .route("/roles", web::post().to(create_role))
            .route("/roles/{id}", web::delete().to(delete_role))
            .route("/members", web::post().to(assign_member))
            .route("/members/{id}", web::delete().to(remove_member))
            .route("/{id}", web::delete().to(delete_team)),
    );
}

async fn overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.teams_overview().await?))
}

async fn create_team(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NamedInput>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_team(&current.actor(), &input.name).await?))
}

async fn delete_team(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_team(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn create_role(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NamedInput>,
) -> Result<HttpResponse> {
    Ok(created(
        state
            .portal
            .create_team_role(&current.actor(), &input.name)
            .await?,
    ))
}

async fn delete_role(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state
        .portal
        .delete_team_role(&current.actor(), id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn assign_member(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<MemberAssignment>,
) -> Result<HttpResponse> {
    Ok(ok(state.portal.assign_member(&current.actor(), &input).await?))
}

async fn remove_member(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state
        .portal
        .remove_member(&current.actor(), id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
