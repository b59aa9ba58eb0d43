//! Configuration management for the dashboard
//!
//! This module handles loading, validation, and management of all dashboard
//! configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RbacError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RbacError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from environment variables
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_env(),
        }
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let dashboard: DashboardConfig = serde_yaml::from_str(content)
            .map_err(|e| RbacError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { dashboard };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let dashboard = DashboardConfig::from_env()?;
        let config = Self { dashboard };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.dashboard.server
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.dashboard.rbac
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.dashboard.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.dashboard.validate().map_err(RbacError::Config)?;
        self.dashboard.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.dashboard)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.dashboard)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
