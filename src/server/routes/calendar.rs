//! Volunteer visit calendar

use crate::core::models::{NewVisit, VisitRange};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calendar")
            .route("", web::get().to(list_visits))
            .route("", web::post().to(create_visit))
            .route("/{id}", web::delete().to(delete_visit)),
    );
}

/// `GET /calendar?start=2025-03-01&end=2025-03-31`
async fn list_visits(
    state: web::Data<AppState>,
    range: web::Query<VisitRange>,
) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_visits(range.into_inner()).await?))
}

async fn create_visit(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewVisit>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_visit(&current.actor(), &input).await?))
}

async fn delete_visit(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_visit(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
