//! User management methods

use crate::core::models::{NewUser, UNKNOWN_ROLE, User, UserUpdate, UserView};
use crate::utils::error::{RbacError, Result};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::system::AccessControlStore;
use super::validation;

impl AccessControlStore {
    /// All users in insertion order
    pub fn list_users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    /// All users with their role names resolved
    pub fn list_user_views(&self) -> Vec<UserView> {
        let state = self.state.read();
        state
            .users
            .iter()
            .map(|user| UserView {
                user: user.clone(),
                role_name: state
                    .role(user.role_id)
                    .map(|role| role.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROLE.to_string()),
            })
            .collect()
    }

    /// Get user by identifier
    pub fn get_user(&self, id: Uuid) -> Option<User> {
        self.state.read().user(id).cloned()
    }

    /// Add a user under a fresh identifier, stamped with the current time
    ///
    /// The role reference must resolve at creation time.
    pub fn add_user(&self, draft: NewUser) -> Result<User> {
        let draft = validation::new_user(draft).inspect_err(|e| {
            warn!(error = %e, "Rejected user draft");
        })?;

        let mut state = self.state.write();
        if state.role(draft.role_id).is_none() {
            warn!(role_id = %draft.role_id, "Rejected user draft with unknown role");
            return Err(RbacError::DanglingReference(draft.role_id));
        }

        let user = User::from_draft(state.fresh_id(), Utc::now(), draft);
        state.users.push(user.clone());

        debug!(user_id = %user.id, role_id = %user.role_id, "Added user");
        Ok(user)
    }

    /// Merge the supplied fields into an existing user
    ///
    /// Identifier and creation time never change.
    pub fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User> {
        let update = validation::user_update(update).inspect_err(|e| {
            warn!(user_id = %id, error = %e, "Rejected user update");
        })?;

        let mut state = self.state.write();
        let index = state
            .user_index(id)
            .ok_or_else(|| RbacError::user_not_found(id))?;

        if let Some(role_id) = update.role_id {
            if state.role(role_id).is_none() {
                warn!(user_id = %id, role_id = %role_id, "Rejected user update with unknown role");
                return Err(RbacError::DanglingReference(role_id));
            }
        }

        let user = &mut state.users[index];
        user.apply(update);

        debug!(user_id = %id, "Updated user");
        Ok(user.clone())
    }

    /// Remove a user
    ///
    /// Removing the session actor leaves the session without permissions.
    pub fn delete_user(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write();

        match state.user_index(id) {
            Some(index) => {
                state.users.remove(index);
                if state.current_user_id == Some(id) {
                    warn!(user_id = %id, "Deleted the session actor");
                }
                debug!(user_id = %id, "Deleted user");
                Ok(())
            }
            None if self.config.strict_deletes => Err(RbacError::user_not_found(id)),
            None => {
                debug!(user_id = %id, "Delete of unknown user ignored");
                Ok(())
            }
        }
    }
}
