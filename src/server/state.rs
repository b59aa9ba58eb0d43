//! Application state shared across HTTP handlers

use crate::auth::AccessControlStore;
use crate::config::Config;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker. The store does its own locking, so handlers
/// only ever need a shared reference.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard configuration (shared read-only)
    pub config: Arc<Config>,
    /// Access control store
    pub store: Arc<AccessControlStore>,
}

impl AppState {
    /// Create state with a store built from the RBAC configuration
    pub fn new(config: Config) -> Result<Self> {
        let store = AccessControlStore::new(config.rbac())?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create state around an existing store
    pub fn with_store(config: Config, store: Arc<AccessControlStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Get dashboard configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
