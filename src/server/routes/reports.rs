//! Team reports

use crate::core::models::{NewReport, NewTag};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("", web::get().to(list_reports))
            .route("", web::post().to(create_report))
            .route("/tags", web::get().to(list_tags))
            .route("/tags", web::post().to(create_tag))
            .route("/tags/{id}", web::delete().to(delete_tag))
            .route("/{id}", web::delete().to(delete_report)),
    );
}

async fn list_reports(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_reports(&current.actor()).await?))
}

async fn create_report(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewReport>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_report(&current.actor(), &input).await?))
}

async fn delete_report(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_report(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_tags(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_tags().await?))
}

async fn create_tag(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewTag>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_tag(&current.actor(), &input.name).await?))
}

async fn delete_tag(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_tag(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
