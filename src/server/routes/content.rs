//! Home page, wishes, events and projects

use crate::core::models::{EventInput, NewProject, NewWish, SiteSetting, WishStatusUpdate};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/home", web::get().to(home))
        .service(
            web::scope("/wishes")
                .route("", web::get().to(list_wishes))
                .route("", web::post().to(create_wish))
                .route("/{id}/status", web::patch().to(update_wish_status))
                .route("/{id}", web::delete().to(delete_wish)),
        )
        .service(
            web::scope("/events")
                .route("", web::get().to(list_events))
                .route("", web::post().to(create_event))
                .route("/{id}", web::put().to(update_event))
                .route("/{id}", web::delete().to(delete_event)),
        )
        .service(
            web::scope("/projects")
                .route("", web::get().to(list_projects))
                .route("", web::post().to(create_project))
                .route("/{id}", web::delete().to(delete_project)),
        );
}

/// Counters and settings shown on the home page
#[derive(Debug, Serialize)]
pub struct HomeSummary {
    pub completed_wishes: u64,
    pub events: u64,
    pub settings: Vec<SiteSetting>,
}

async fn home(state: web::Data<AppState>) -> Result<HttpResponse> {
    let (completed_wishes, events, settings) = futures::try_join!(
        state.portal.completed_wish_count(),
        state.portal.event_count(),
        state.portal.site_settings(),
    )?;
    Ok(ok(HomeSummary {
        completed_wishes,
        events,
        settings,
    }))
}

async fn list_wishes(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_wishes().await?))
}

async fn create_wish(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewWish>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_wish(&current.actor(), &input).await?))
}

async fn update_wish_status(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<WishStatusUpdate>,
) -> Result<HttpResponse> {
    let wish = state
        .portal
        .update_wish_status(&current.actor(), id.into_inner(), input.status)
        .await?;
    Ok(ok(wish))
}

async fn delete_wish(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_wish(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_events(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_events().await?))
}

async fn create_event(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<EventInput>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_event(&current.actor(), &input).await?))
}

async fn update_event(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<EventInput>,
) -> Result<HttpResponse> {
    let event = state
        .portal
        .update_event(&current.actor(), id.into_inner(), &input)
        .await?;
    Ok(ok(event))
}

async fn delete_event(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_event(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_projects().await?))
}

async fn create_project(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewProject>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.create_project(&current.actor(), &input).await?))
}

async fn delete_project(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_project(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
