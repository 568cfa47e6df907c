//! Public contact form, contact details and feedback widget

use crate::core::models::{ContactInfo, NewContactMessage, NewFeedback};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .route("", web::post().to(submit_message))
            .route("/info", web::get().to(contact_info))
            .route("/info", web::put().to(update_contact_info)),
    )
    .route("/feedback", web::post().to(submit_feedback));
}

async fn submit_message(
    state: web::Data<AppState>,
    input: web::Json<NewContactMessage>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.submit_contact_message(&input).await?))
}

async fn contact_info(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.contact_info().await?))
}

async fn update_contact_info(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<ContactInfo>,
) -> Result<HttpResponse> {
    Ok(ok(state
        .portal
        .update_contact_info(&current.actor(), &input)
        .await?))
}

async fn submit_feedback(
    state: web::Data<AppState>,
    input: web::Json<NewFeedback>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.submit_feedback(&input.content).await?))
}
