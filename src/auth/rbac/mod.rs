//! Role-Based Access Control (RBAC) store
//!
//! This module provides the access control store: the role and user
//! collections, the session actor, and permission evaluation.

mod helpers;
mod permissions;
mod roles;
mod system;
mod types;
mod users;
pub(crate) mod validation;

// Re-export public types and structs
pub use system::{AccessControlStore, StoreSnapshot};
pub use types::{PermissionCheck, SessionView};
