//! Session actor endpoints

use crate::core::models::{Permission, Resource};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// Configure session routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/session")
            .route("", web::get().to(get_session))
            .route("", web::put().to(set_session))
            .route(
                "/permissions/{resource}/{permission}",
                web::get().to(check_permission),
            ),
    );
}

/// Session switch request
#[derive(Debug, Deserialize)]
struct SetSessionRequest {
    user_id: Uuid,
}

async fn get_session(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(state.store.session_view()))
}

async fn set_session(
    state: web::Data<AppState>,
    body: web::Json<SetSessionRequest>,
) -> Result<HttpResponse> {
    let session = state.store.set_current_user(body.user_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(session)))
}

async fn check_permission(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (resource, permission) = path.into_inner();
    let resource: Resource = resource.parse().map_err(RbacError::bad_request)?;
    let permission: Permission = permission.parse().map_err(RbacError::bad_request)?;

    let check = state.store.check_permission(resource, permission);
    Ok(HttpResponse::Ok().json(ApiResponse::success(check)))
}
