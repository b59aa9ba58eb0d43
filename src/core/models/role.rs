//! Role models
//!
//! This module defines roles and the draft/patch shapes used to create and
//! edit them.

use super::permission::PermissionMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named bundle of resource grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier, assigned by the store
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-form description (may be empty)
    pub description: String,
    /// Resource grants
    #[serde(default)]
    pub permissions: PermissionMap,
}

/// Role draft, everything but the identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRole {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: PermissionMap,
}

impl NewRole {
    /// Create a draft with an empty description
    pub fn new(name: impl Into<String>, permissions: PermissionMap) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            permissions,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial role update
///
/// `None` leaves a field unchanged. A supplied `permissions` map replaces the
/// role's whole map; it is not merged per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionMap>,
}

impl RoleUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn permissions(mut self, permissions: PermissionMap) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Whether no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.permissions.is_none()
    }
}

impl Role {
    /// Materialize a draft under a freshly assigned identifier
    pub(crate) fn from_draft(id: Uuid, draft: NewRole) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            permissions: draft.permissions,
        }
    }

    /// Merge the supplied fields of `update` into this role
    pub(crate) fn apply(&mut self, update: RoleUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(permissions) = update.permissions {
            self.permissions = permissions;
        }
    }
}
