//! Volunteer application form
//!
//! Question and application management lives under `/admin/volunteer`.

use crate::core::models::ApplicationForm;
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/volunteer")
            .route("/questions", web::get().to(questions))
            .route("/applications", web::post().to(submit_application))
            .route("/applications/me", web::get().to(my_application)),
    );
}

async fn questions(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.volunteer_questions().await?))
}

async fn submit_application(
    state: web::Data<AppState>,
    current: CurrentUser,
    form: web::Json<ApplicationForm>,
) -> Result<HttpResponse> {
    Ok(created(state.portal.submit_application(&current.actor(), &form).await?))
}

/// `null` data when the caller has not applied
async fn my_application(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.my_application(&current.actor()).await?))
}
