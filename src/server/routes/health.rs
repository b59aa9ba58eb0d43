//! Health check and version endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health status response
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    /// Number of roles in the store
    pub roles: usize,
    /// Number of users in the store
    pub users: usize,
}

/// Basic liveness check
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let snapshot = state.store.snapshot();
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        roles: snapshot.roles.len(),
        users: snapshot.users.len(),
    };

    HttpResponse::Ok().json(ApiResponse::success(health_status))
}

async fn version_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(crate::build_info()))
}
