//! Core data models for the dashboard
//!
//! This module defines the role, user and permission data structures owned by
//! the access control store.

pub mod permission;
pub mod role;
pub mod user;

// Re-export commonly used types
pub use permission::{Permission, PermissionMap, Resource};
pub use role::{NewRole, Role, RoleUpdate};
pub use user::{NewUser, UNKNOWN_ROLE, User, UserStatus, UserUpdate, UserView};
