//! Health check endpoints

use crate::server::routes::ok;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/detailed", web::get().to(detailed_health_check)),
    );
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// Basic liveness check
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    ok(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    })
}

/// Liveness plus store reachability
async fn detailed_health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Detailed health check requested");

    match state.storage.health_check().await {
        Ok(storage) if storage.overall => ok(storage),
        Ok(storage) => HttpResponse::ServiceUnavailable().json(super::ApiResponse::success(storage)),
        Err(e) => HttpResponse::ServiceUnavailable()
            .json(super::ApiResponse::<()>::error(e.to_string())),
    }
}
