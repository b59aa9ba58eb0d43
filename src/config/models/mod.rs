//! Configuration data models
//!
//! This module defines all configuration structures used by the dashboard.

pub mod dashboard;
pub mod logging;
pub mod rbac;
pub mod server;

// Re-export all configuration types
pub use dashboard::*;
pub use logging::*;
pub use rbac::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024 // 256KB
}

pub fn default_seed_admin_name() -> String {
    "Admin User".to_string()
}

pub fn default_seed_admin_email() -> String {
    "admin@example.com".to_string()
}

pub fn default_true() -> bool {
    true
}
