//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function.

use crate::auth::AccessControlStore;
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<AccessControlStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve an existing store instead of building one from the config
    pub fn with_store(mut self, store: Arc<AccessControlStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RbacError::Config("Configuration is required".to_string()))?;

        match self.store {
            Some(store) => Ok(HttpServer::with_state(AppState::with_store(config, store))),
            None => HttpServer::new(&config),
        }
    }
}

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting RBAC dashboard");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API endpoints:");
    info!("   GET    /health");
    info!("   GET    /api/v1/users, /api/v1/roles");
    info!("   POST   /api/v1/users, /api/v1/roles");
    info!("   PATCH  /api/v1/users/{{id}}, /api/v1/roles/{{id}}");
    info!("   DELETE /api/v1/users/{{id}}, /api/v1/roles/{{id}}");
    info!("   GET    /api/v1/session, PUT /api/v1/session");

    server.start().await
}
