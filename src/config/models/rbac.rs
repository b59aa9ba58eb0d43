//! Access control store configuration

use super::*;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Seed the Admin/Editor/Viewer roles and the admin user at startup
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
    /// Name of the seeded admin user
    #[serde(default = "default_seed_admin_name")]
    pub seed_admin_name: String,
    /// Email of the seeded admin user
    #[serde(default = "default_seed_admin_email")]
    pub seed_admin_email: String,
    /// Report deletes of unknown ids as NotFound instead of ignoring them
    #[serde(default)]
    pub strict_deletes: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            seed_admin_name: default_seed_admin_name(),
            seed_admin_email: default_seed_admin_email(),
            strict_deletes: false,
        }
    }
}

impl RbacConfig {
    /// Configuration for a store that starts out empty
    pub fn unseeded() -> Self {
        Self {
            seed_defaults: false,
            ..Self::default()
        }
    }
}
