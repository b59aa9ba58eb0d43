//! Permission and resource vocabulary
//!
//! A role grants [`Permission`]s per [`Resource`]. Each (resource, permission)
//! pair is granted or denied independently; there is no wildcard or hierarchy.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Action allowed on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Create new entities
    Create,
    /// Read entities
    Read,
    /// Update existing entities
    Update,
    /// Delete entities
    Delete,
}

impl Permission {
    /// Every permission, in canonical order
    pub const ALL: [Permission; 4] = [
        Permission::Create,
        Permission::Read,
        Permission::Update,
        Permission::Delete,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Create => "create",
            Permission::Read => "read",
            Permission::Update => "update",
            Permission::Delete => "delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Permission::Create),
            "read" => Ok(Permission::Read),
            "update" => Ok(Permission::Update),
            "delete" => Ok(Permission::Delete),
            _ => Err(format!("Invalid permission: {}", s)),
        }
    }
}

/// Protected object category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// User accounts
    Users,
    /// Role definitions
    Roles,
    /// Permission grants
    Permissions,
}

impl Resource {
    /// Every resource, in canonical order
    pub const ALL: [Resource; 3] = [Resource::Users, Resource::Roles, Resource::Permissions];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Roles => "roles",
            Resource::Permissions => "permissions",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Resource::Users),
            "roles" => Ok(Resource::Roles),
            "permissions" => Ok(Resource::Permissions),
            _ => Err(format!("Invalid resource: {}", s)),
        }
    }
}

/// Grants held by a role, keyed by resource
///
/// A resource missing from the map grants nothing. Serializes as
/// `{"users": ["create", "read"]}`; repeated permissions in the input
/// collapse into one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMap(BTreeMap<Resource, BTreeSet<Permission>>);

impl PermissionMap {
    /// Empty map, grants nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Every permission on every resource
    pub fn full() -> Self {
        Self::uniform(&Permission::ALL)
    }

    /// The same permissions on every resource
    pub fn uniform(permissions: &[Permission]) -> Self {
        let mut map = Self::new();
        for resource in Resource::ALL {
            map.0
                .insert(resource, permissions.iter().copied().collect());
        }
        map
    }

    /// Builder-style grant
    pub fn with(mut self, resource: Resource, permissions: &[Permission]) -> Self {
        self.0
            .entry(resource)
            .or_default()
            .extend(permissions.iter().copied());
        self
    }

    /// Whether `permission` is granted on `resource`
    pub fn grants(&self, resource: Resource, permission: Permission) -> bool {
        self.0
            .get(&resource)
            .is_some_and(|set| set.contains(&permission))
    }

    /// Permissions granted on `resource`, in canonical order
    pub fn permissions_for(&self, resource: Resource) -> Vec<Permission> {
        self.0
            .get(&resource)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Whether the map has an entry for `resource`, even an empty one
    pub fn contains_resource(&self, resource: Resource) -> bool {
        self.0.contains_key(&resource)
    }

    pub fn grant(&mut self, resource: Resource, permission: Permission) {
        self.0.entry(resource).or_default().insert(permission);
    }

    /// Toggle a single checkbox of the role form
    pub fn set(&mut self, resource: Resource, permission: Permission, granted: bool) {
        if granted {
            self.grant(resource, permission);
        } else {
            // keeps the (possibly empty) entry, like unticking in the form
            self.0.entry(resource).or_default().remove(&permission);
        }
    }

    /// Grant every permission on `resource`
    pub fn grant_all(&mut self, resource: Resource) {
        self.0.insert(resource, Permission::ALL.into_iter().collect());
    }

    /// Clear `resource` down to an empty set
    pub fn revoke_all(&mut self, resource: Resource) {
        self.0.insert(resource, BTreeSet::new());
    }

    /// Number of granted (resource, permission) pairs
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
