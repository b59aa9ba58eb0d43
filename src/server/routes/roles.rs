//! Role management endpoints

use crate::core::models::{NewRole, RoleUpdate};
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/roles")
            .route("", web::get().to(list_roles))
            .route("", web::post().to(create_role))
            .route("/{id}", web::get().to(get_role))
            .route("/{id}", web::patch().to(update_role))
            .route("/{id}", web::delete().to(delete_role)),
    );
}

async fn list_roles(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(list_response(state.store.list_roles()))
}

async fn create_role(
    state: web::Data<AppState>,
    body: web::Json<NewRole>,
) -> Result<HttpResponse> {
    let role = state.store.add_role(body.into_inner())?;
    info!(role_id = %role.id, name = %role.name, "Role created");
    Ok(HttpResponse::Created().json(ApiResponse::success(role)))
}

async fn get_role(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let role = state
        .store
        .get_role(id)
        .ok_or_else(|| RbacError::role_not_found(id))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(role)))
}

/// A supplied `permissions` object replaces the role's grants as a whole
async fn update_role(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<RoleUpdate>,
) -> Result<HttpResponse> {
    let role = state.store.update_role(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(role)))
}

/// Users holding the role keep the dangling reference
async fn delete_role(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    state.store.delete_role(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
