//! User models
//!
//! This module defines users and the draft/patch shapes used to create and
//! edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role name rendered for a user whose role reference does not resolve
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Weak reference to the assigned role
    pub role_id: Uuid,
    /// Account status
    pub status: UserStatus,
    /// Creation timestamp, immutable once set
    pub created_at: DateTime<Utc>,
}

/// User status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Active user
    #[default]
    Active,
    /// Inactive user
    Inactive,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Invalid user status: {}", s)),
        }
    }
}

/// User draft, everything but the identifier and creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role_id: Uuid,
    #[serde(default)]
    pub status: UserStatus,
}

impl NewUser {
    /// Create an active user draft
    pub fn new(name: impl Into<String>, email: impl Into<String>, role_id: Uuid) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role_id,
            status: UserStatus::Active,
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial user update
///
/// `None` leaves a field unchanged. Identifier and creation time are not
/// updatable and have no slot here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role_id(mut self, role_id: Uuid) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role_id.is_none() && self.status.is_none()
    }
}

impl User {
    /// Materialize a draft under a fresh identifier and creation time
    pub(crate) fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role_id: draft.role_id,
            status: draft.status,
            created_at,
        }
    }

    /// Merge the supplied fields of `update` into this user
    pub(crate) fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role_id) = update.role_id {
            self.role_id = role_id;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// User row with its role name resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    #[serde(flatten)]
    pub user: User,
    /// Role name, or [`UNKNOWN_ROLE`] when the reference dangles
    pub role_name: String,
}
