//! Error handling for the dashboard
//!
//! This module defines all error types used throughout the store and the HTTP
//! layer.

#![allow(missing_docs)]

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the dashboard
///
/// Every store error is local to one operation: nothing is retryable and a
/// failed operation leaves state unchanged.
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Update or delete referencing an absent identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required field missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Role identifier that resolves to no role
    #[error("Dangling reference: role {0} does not exist")]
    DanglingReference(Uuid),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for RbacError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            RbacError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            RbacError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            RbacError::DanglingReference(_) => (
                actix_web::http::StatusCode::CONFLICT,
                "DANGLING_REFERENCE",
                self.to_string(),
            ),
            RbacError::BadRequest(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                self.to_string(),
            ),
            RbacError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}

/// Helper functions for creating specific errors
impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn user_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("user {}", id))
    }

    pub fn role_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("role {}", id))
    }

    /// Whether this error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RbacError::NotFound(_)
                | RbacError::Validation(_)
                | RbacError::DanglingReference(_)
                | RbacError::BadRequest(_)
        )
    }
}
