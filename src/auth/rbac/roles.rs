//! Role management methods

use crate::core::models::{NewRole, Role, RoleUpdate, UNKNOWN_ROLE};
use crate::utils::error::{RbacError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use super::system::AccessControlStore;
use super::validation;

impl AccessControlStore {
    /// All roles in insertion order
    pub fn list_roles(&self) -> Vec<Role> {
        self.state.read().roles.clone()
    }

    /// Get role by identifier
    pub fn get_role(&self, id: Uuid) -> Option<Role> {
        self.state.read().role(id).cloned()
    }

    /// First role with exactly this name
    pub fn find_role_by_name(&self, name: &str) -> Option<Role> {
        self.state
            .read()
            .roles
            .iter()
            .find(|role| role.name == name)
            .cloned()
    }

    /// Display name for a role reference, "Unknown Role" if it dangles
    pub fn role_name(&self, role_id: Uuid) -> String {
        self.state
            .read()
            .role(role_id)
            .map(|role| role.name.clone())
            .unwrap_or_else(|| UNKNOWN_ROLE.to_string())
    }

    /// Add a role under a freshly generated identifier
    pub fn add_role(&self, draft: NewRole) -> Result<Role> {
        let draft = validation::new_role(draft).inspect_err(|e| {
            warn!(error = %e, "Rejected role draft");
        })?;

        let mut state = self.state.write();
        let role = Role::from_draft(state.fresh_id(), draft);
        state.roles.push(role.clone());

        debug!(role_id = %role.id, name = %role.name, "Added role");
        Ok(role)
    }

    /// Merge the supplied fields into an existing role
    ///
    /// A supplied permission map replaces the role's map as a whole.
    pub fn update_role(&self, id: Uuid, update: RoleUpdate) -> Result<Role> {
        let update = validation::role_update(update).inspect_err(|e| {
            warn!(role_id = %id, error = %e, "Rejected role update");
        })?;

        let mut state = self.state.write();
        let index = state
            .role_index(id)
            .ok_or_else(|| RbacError::role_not_found(id))?;

        let role = &mut state.roles[index];
        role.apply(update);

        debug!(role_id = %id, "Updated role");
        Ok(role.clone())
    }

    /// Remove a role
    ///
    /// Users still referencing it are left dangling.
    pub fn delete_role(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write();

        match state.role_index(id) {
            Some(index) => {
                state.roles.remove(index);
                let orphaned = state.users.iter().filter(|u| u.role_id == id).count();
                debug!(role_id = %id, orphaned_users = orphaned, "Deleted role");
                Ok(())
            }
            None if self.config.strict_deletes => Err(RbacError::role_not_found(id)),
            None => {
                debug!(role_id = %id, "Delete of unknown role ignored");
                Ok(())
            }
        }
    }
}
