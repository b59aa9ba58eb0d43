//! Lookup helpers over the locked store state

use crate::core::models::{Role, User};
use uuid::Uuid;

use super::system::StoreState;

impl StoreState {
    pub(super) fn role(&self, id: Uuid) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    pub(super) fn role_index(&self, id: Uuid) -> Option<usize> {
        self.roles.iter().position(|role| role.id == id)
    }

    pub(super) fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub(super) fn user_index(&self, id: Uuid) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    /// Random v4 identifier unused by any role or user
    pub(super) fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.role(id).is_none() && self.user(id).is_none() {
                return id;
            }
        }
    }
}
