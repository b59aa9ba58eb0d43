//! # RBAC Dashboard
//!
//! An in-memory role-based access control store with a JSON management API.
//!
//! ## Features
//!
//! - **Roles**: named permission maps over users, roles and permissions
//! - **Users**: each assigned exactly one role, active or inactive
//! - **Session actor**: every permission check is answered for the current user
//! - **Thread safe**: one store shared by all HTTP workers
//!
//! ## Library use
//!
//! ```rust,no_run
//! use rbac_dashboard::{AccessControlStore, Permission, Resource};
//! use rbac_dashboard::config::RbacConfig;
//!
//! let store = AccessControlStore::new(&RbacConfig::default())?;
//! assert!(store.has_permission(Resource::Users, Permission::Delete));
//! # Ok::<(), rbac_dashboard::RbacError>(())
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use rbac_dashboard::{Config, Dashboard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     let dashboard = Dashboard::new(config)?;
//!     dashboard.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AccessControlStore, PermissionCheck, SessionView, StoreSnapshot};
pub use config::Config;
pub use core::models::{
    NewRole, NewUser, Permission, PermissionMap, Resource, Role, RoleUpdate, User, UserStatus,
    UserUpdate, UserView,
};
pub use utils::error::{RbacError, Result};

use std::sync::Arc;
use tracing::info;

/// The dashboard service: one store served over HTTP
pub struct Dashboard {
    config: Config,
    server: server::HttpServer,
}

impl Dashboard {
    /// Create a new dashboard instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new dashboard instance");
        let server = server::HttpServer::new(&config)?;
        Ok(Self { config, server })
    }

    /// Shared handle to the store being served
    pub fn store(&self) -> Arc<AccessControlStore> {
        Arc::clone(&self.server.state().store)
    }

    /// Run the dashboard server
    pub async fn run(self) -> Result<()> {
        info!("Starting RBAC dashboard");
        info!("Configuration: {:?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp in seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
