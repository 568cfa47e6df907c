//! Admin panel endpoints
//!
//! Every handler here requires a session; the capability checks happen in
//! the portal services.

use crate::auth::Role;
use crate::core::models::{
    ApplicationReview, NewQuestion, PermissionUpdate, QuestionActivation, RoleChange, SettingValue,
};
use crate::server::middleware::CurrentUser;
use crate::server::routes::{created, ok};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/settings", web::get().to(site_settings)).service(
        web::scope("/admin")
            .route("/stats", web::get().to(stats))
            .route("/users", web::get().to(list_users))
            .route("/users/{id}/role", web::put().to(change_role))
            .route("/users/{id}/promote", web::post().to(promote))
            .route("/users/{id}", web::delete().to(delete_user))
            .route("/capabilities", web::get().to(capabilities))
            .route("/roles", web::get().to(role_permissions))
            .route("/roles/{role}", web::put().to(update_role_permissions))
            .route("/messages", web::get().to(list_messages))
            .route("/messages/{id}/read", web::patch().to(toggle_message_read))
            .route("/messages/{id}", web::delete().to(delete_message))
            .route("/feedback", web::get().to(list_feedback))
            .route("/feedback/{id}", web::delete().to(delete_feedback))
            .route("/settings/{key}", web::put().to(update_site_setting))
            .route("/volunteer/questions", web::get().to(all_questions))
            .route("/volunteer/questions", web::post().to(create_question))
            .route("/volunteer/questions/{id}", web::patch().to(set_question_active))
            .route("/volunteer/questions/{id}", web::delete().to(delete_question))
            .route("/volunteer/applications", web::get().to(list_applications))
            .route("/volunteer/applications/{id}", web::patch().to(review_application)),
    );
}

async fn stats(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.dashboard_stats(&current.actor()).await?))
}

async fn list_users(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_users(&current.actor()).await?))
}

async fn change_role(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<RoleChange>,
) -> Result<HttpResponse> {
    let user = state
        .portal
        .change_role(&current.actor(), id.into_inner(), input.role)
        .await?;
    Ok(ok(user))
}

async fn promote(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    Ok(ok(state.portal.promote(&current.actor(), id.into_inner()).await?))
}

async fn delete_user(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state.portal.delete_user(&current.actor(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn capabilities(state: web::Data<AppState>, _current: CurrentUser) -> HttpResponse {
    ok(state.portal.capabilities())
}

async fn role_permissions(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.role_permissions(&current.actor()).await?))
}

/// `PUT /admin/roles/MEMBER` with `{"permissions": ["MANAGE_WISHES"]}`
async fn update_role_permissions(
    state: web::Data<AppState>,
    current: CurrentUser,
    role: web::Path<Role>,
    input: web::Json<PermissionUpdate>,
) -> Result<HttpResponse> {
    let updated = state
        .portal
        .update_role_permissions(&current.actor(), role.into_inner(), &input.permissions)
        .await?;
    Ok(ok(updated))
}

async fn list_messages(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_messages(&current.actor()).await?))
}

async fn toggle_message_read(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    Ok(ok(state
        .portal
        .toggle_message_read(&current.actor(), id.into_inner())
        .await?))
}

async fn delete_message(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state
        .portal
        .delete_message(&current.actor(), id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_feedback(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_feedback(&current.actor()).await?))
}

async fn delete_feedback(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state
        .portal
        .delete_feedback(&current.actor(), id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn site_settings(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.portal.site_settings().await?))
}

async fn update_site_setting(
    state: web::Data<AppState>,
    current: CurrentUser,
    key: web::Path<String>,
    input: web::Json<SettingValue>,
) -> Result<HttpResponse> {
    let setting = state
        .portal
        .update_site_setting(&current.actor(), &key, &input.value)
        .await?;
    Ok(ok(setting))
}

async fn all_questions(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.all_volunteer_questions(&current.actor()).await?))
}

async fn create_question(
    state: web::Data<AppState>,
    current: CurrentUser,
    input: web::Json<NewQuestion>,
) -> Result<HttpResponse> {
    let question = state
        .portal
        .create_volunteer_question(&current.actor(), &input)
        .await?;
    Ok(created(question))
}

async fn set_question_active(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<QuestionActivation>,
) -> Result<HttpResponse> {
    let question = state
        .portal
        .set_volunteer_question_active(&current.actor(), id.into_inner(), input.is_active)
        .await?;
    Ok(ok(question))
}

async fn delete_question(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    state
        .portal
        .delete_volunteer_question(&current.actor(), id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_applications(state: web::Data<AppState>, current: CurrentUser) -> Result<HttpResponse> {
    Ok(ok(state.portal.list_applications(&current.actor()).await?))
}

async fn review_application(
    state: web::Data<AppState>,
    current: CurrentUser,
    id: web::Path<Uuid>,
    input: web::Json<ApplicationReview>,
) -> Result<HttpResponse> {
    let application = state
        .portal
        .review_application(&current.actor(), id.into_inner(), input.status)
        .await?;
    Ok(ok(application))
}
