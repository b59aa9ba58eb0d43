//! Core configuration validators
//!
//! This module provides validation implementations for the dashboard
//! configuration sections.

use super::trait_def::Validate;
use crate::auth::rbac::validation::{MAX_EMAIL_LEN, MAX_USER_NAME_LEN};
use crate::config::models::*;
use crate::utils::is_valid_email;
use tracing::debug;

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating dashboard configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.server
            .cors
            .validate()
            .map_err(|e| format!("CORS config error: {}", e))?;
        self.rbac
            .validate()
            .map_err(|e| format!("RBAC config error: {}", e))?;

        debug!("Dashboard configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        for method in &self.allowed_methods {
            if method.parse::<actix_web::http::Method>().is_err() {
                return Err(format!("Invalid CORS method: {}", method));
            }
        }

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.seed_defaults {
            return Ok(());
        }

        let name = self.seed_admin_name.trim();
        if name.is_empty() {
            return Err("Seed admin name cannot be empty".to_string());
        }
        if name.chars().count() > MAX_USER_NAME_LEN {
            return Err(format!(
                "Seed admin name must be at most {} characters",
                MAX_USER_NAME_LEN
            ));
        }

        let email = self.seed_admin_email.trim();
        if email.chars().count() > MAX_EMAIL_LEN || !is_valid_email(email) {
            return Err(format!(
                "Seed admin email is not a valid address: {}",
                self.seed_admin_email
            ));
        }

        Ok(())
    }
}
