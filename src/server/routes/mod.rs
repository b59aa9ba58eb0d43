//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod roles;
pub mod session;
pub mod users;

use serde::Serialize;

/// Standard API response structure
///
/// Errors never use this envelope; they are rendered by `RbacError`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data
    pub data: T,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
        }
    }

    /// Create a successful response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
        }
    }
}

/// Response for collections, with the item count as metadata
pub(crate) fn list_response<T: Serialize>(items: Vec<T>) -> ApiResponse<Vec<T>> {
    let total = items.len();
    ApiResponse::success_with_meta(items, serde_json::json!({ "total": total }))
}
