//! Top-level dashboard configuration

use super::*;
use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "RBAC_";

/// Dashboard configuration as read from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Access control store configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Build from `RBAC_*` environment variables, defaults for anything unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
        };

        let mut config = Self::default();

        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = parse_var("PORT", &port)?;
        }
        if let Some(workers) = var("WORKERS") {
            config.server.workers = Some(parse_var("WORKERS", &workers)?);
        }
        if let Some(origins) = var("CORS_ALLOWED_ORIGINS") {
            config.server.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(seed) = var("SEED_DEFAULTS") {
            config.rbac.seed_defaults = parse_bool("SEED_DEFAULTS", &seed)?;
        }
        if let Some(name) = var("SEED_ADMIN_NAME") {
            config.rbac.seed_admin_name = name;
        }
        if let Some(email) = var("SEED_ADMIN_EMAIL") {
            config.rbac.seed_admin_email = email;
        }
        if let Some(strict) = var("STRICT_DELETES") {
            config.rbac.strict_deletes = parse_bool("STRICT_DELETES", &strict)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level.parse()?;
        }
        if let Some(json) = var("LOG_JSON") {
            config.logging.json = parse_bool("LOG_JSON", &json)?;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        RbacError::config(format!(
            "Invalid value for {}{}: {}",
            ENV_PREFIX, name, value
        ))
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RbacError::config(format!(
            "Invalid boolean for {}{}: {}",
            ENV_PREFIX, name, value
        ))),
    }
}
