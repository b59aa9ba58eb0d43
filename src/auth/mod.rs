//! Authorization
//!
//! This module provides the access control store the dashboard is built
//! around.

pub mod rbac;

// Re-export commonly used types
pub use rbac::{AccessControlStore, PermissionCheck, SessionView, StoreSnapshot};
