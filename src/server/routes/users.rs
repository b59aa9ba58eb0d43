//! User management endpoints

use crate::core::models::{NewUser, UserUpdate};
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::patch().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// List users with their role names
async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(list_response(state.store.list_user_views()))
}

async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<NewUser>,
) -> Result<HttpResponse> {
    let user = state.store.add_user(body.into_inner())?;
    info!(user_id = %user.id, "User created");
    Ok(HttpResponse::Created().json(ApiResponse::success(user)))
}

async fn get_user(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .store
        .get_user(id)
        .ok_or_else(|| RbacError::user_not_found(id))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UserUpdate>,
) -> Result<HttpResponse> {
    let user = state.store.update_user(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

async fn delete_user(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    state.store.delete_user(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
