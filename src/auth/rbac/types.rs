//! RBAC type definitions

use crate::core::models::{Permission, PermissionMap, Resource, User};
use serde::Serialize;
use uuid::Uuid;

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Resource that was checked
    pub resource: Resource,
    /// Permission that was checked
    pub permission: Permission,
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_by_role: Option<Uuid>,
    /// Reason for denial (if not granted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(super) fn granted(resource: Resource, permission: Permission, role_id: Uuid) -> Self {
        Self {
            resource,
            permission,
            granted: true,
            granted_by_role: Some(role_id),
            denial_reason: None,
        }
    }

    pub(super) fn denied(resource: Resource, permission: Permission, reason: String) -> Self {
        Self {
            resource,
            permission,
            granted: false,
            granted_by_role: None,
            denial_reason: Some(reason),
        }
    }
}

/// Session actor as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Session actor, if it still resolves
    pub user: Option<User>,
    /// Name of the actor's role, or "Unknown Role" when it dangles
    pub role_name: Option<String>,
    /// Everything the actor may do
    pub permissions: PermissionMap,
}
