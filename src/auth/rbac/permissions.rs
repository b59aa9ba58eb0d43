//! Permission checking methods
//!
//! Evaluation is a two-level lookup: session actor → role by id → resource →
//! permission set membership. Nothing is cached, so every answer reflects the
//! latest users and roles.

use crate::core::models::{Permission, PermissionMap, Resource, Role, UNKNOWN_ROLE, User};
use crate::utils::error::{RbacError, Result};
use tracing::{debug, info};
use uuid::Uuid;

use super::system::{AccessControlStore, StoreState};
use super::types::{PermissionCheck, SessionView};

impl StoreState {
    /// Resolve the session actor and its role
    fn actor_role(&self) -> std::result::Result<&Role, String> {
        let user_id = self
            .current_user_id
            .ok_or_else(|| "No session actor".to_string())?;
        let user = self
            .user(user_id)
            .ok_or_else(|| format!("Session actor {} no longer exists", user_id))?;
        self.role(user.role_id)
            .ok_or_else(|| format!("Role {} does not exist", user.role_id))
    }

    fn evaluate(&self, resource: Resource, permission: Permission) -> PermissionCheck {
        let role = match self.actor_role() {
            Ok(role) => role,
            Err(reason) => return PermissionCheck::denied(resource, permission, reason),
        };

        if !role.permissions.contains_resource(resource) {
            return PermissionCheck::denied(
                resource,
                permission,
                format!("Role grants nothing on {}", resource),
            );
        }

        if role.permissions.grants(resource, permission) {
            PermissionCheck::granted(resource, permission, role.id)
        } else {
            PermissionCheck::denied(
                resource,
                permission,
                format!("Missing permission: {}.{}", resource, permission),
            )
        }
    }

    fn session_view(&self) -> SessionView {
        let user = self.current_user_id.and_then(|id| self.user(id).cloned());
        let role_name = user.as_ref().map(|user| {
            self.role(user.role_id)
                .map(|role| role.name.clone())
                .unwrap_or_else(|| UNKNOWN_ROLE.to_string())
        });
        let permissions = self
            .actor_role()
            .map(|role| role.permissions.clone())
            .unwrap_or_default();

        SessionView {
            user,
            role_name,
            permissions,
        }
    }
}

impl AccessControlStore {
    /// Whether the session actor may perform `permission` on `resource`
    ///
    /// A missing actor or a dangling role reference denies everything.
    pub fn has_permission(&self, resource: Resource, permission: Permission) -> bool {
        self.state.read().evaluate(resource, permission).granted
    }

    /// Detailed permission check
    pub fn check_permission(&self, resource: Resource, permission: Permission) -> PermissionCheck {
        let check = self.state.read().evaluate(resource, permission);
        if !check.granted {
            debug!(
                resource = %resource,
                permission = %permission,
                reason = check.denial_reason.as_deref().unwrap_or_default(),
                "Permission denied"
            );
        }
        check
    }

    /// Full grant map of the session actor, empty when its role dangles
    pub fn effective_permissions(&self) -> PermissionMap {
        self.state
            .read()
            .actor_role()
            .map(|role| role.permissions.clone())
            .unwrap_or_default()
    }

    /// The session actor, if it still exists
    pub fn current_user(&self) -> Option<User> {
        let state = self.state.read();
        state.current_user_id.and_then(|id| state.user(id).cloned())
    }

    /// Switch the session actor to an existing user
    ///
    /// Returns the new session as seen under the same write lock.
    pub fn set_current_user(&self, id: Uuid) -> Result<SessionView> {
        let mut state = self.state.write();
        if state.user(id).is_none() {
            return Err(RbacError::user_not_found(id));
        }

        state.current_user_id = Some(id);
        info!(user_id = %id, "Session actor changed");
        Ok(state.session_view())
    }

    /// Session actor, its role name and its grants, read under one lock
    pub fn session_view(&self) -> SessionView {
        self.state.read().session_view()
    }
}
