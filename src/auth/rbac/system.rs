//! Access control store core functionality

use crate::config::RbacConfig;
use crate::core::models::{NewRole, NewUser, Permission, PermissionMap, Role, User, UserStatus};
use crate::utils::error::{RbacError, Result};
use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::validation;

/// Single source of truth for roles, users and the session actor
///
/// All state sits behind one lock. Mutations hold the write lock across
/// their find-then-mutate sequence; queries hold the read lock and always
/// see a fully applied state.
#[derive(Debug)]
pub struct AccessControlStore {
    /// Store configuration
    pub(super) config: RbacConfig,
    /// Roles, users and session actor
    pub(super) state: RwLock<StoreState>,
}

/// State guarded by the store lock
#[derive(Debug, Clone, Default)]
pub(super) struct StoreState {
    /// Users in insertion order
    pub(super) users: Vec<User>,
    /// Roles in insertion order
    pub(super) roles: Vec<Role>,
    /// Identifier of the session actor
    pub(super) current_user_id: Option<Uuid>,
}

/// Consistent copy of the whole store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub current_user_id: Option<Uuid>,
}

impl AccessControlStore {
    /// Create a new store, seeding default roles and the admin user when
    /// configured to
    ///
    /// The seed admin passes the same checks as any other new user, so a
    /// blank or malformed seed identity is a configuration error.
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing access control store");

        let mut state = StoreState::default();
        if config.seed_defaults {
            Self::seed(&mut state, config)?;
        }

        info!(
            roles = state.roles.len(),
            users = state.users.len(),
            "Access control store initialized"
        );

        Ok(Self {
            config: config.clone(),
            state: RwLock::new(state),
        })
    }

    /// Store with no roles, no users and no session actor
    pub fn empty() -> Self {
        Self {
            config: RbacConfig::unseeded(),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Seed Admin, Editor and Viewer plus the admin user as session actor
    fn seed(state: &mut StoreState, config: &RbacConfig) -> Result<()> {
        debug!("Seeding default roles");

        let admin = validation::new_user(
            NewUser::new(
                config.seed_admin_name.clone(),
                config.seed_admin_email.clone(),
                Uuid::nil(),
            )
            .with_status(UserStatus::Active),
        )
        .map_err(|e| RbacError::config(format!("Invalid seed admin: {}", e)))?;

        let default_roles = vec![
            NewRole::new("Admin", PermissionMap::full()).with_description("Full system access"),
            NewRole::new(
                "Editor",
                PermissionMap::uniform(&[Permission::Create, Permission::Read]),
            )
            .with_description("Limited access"),
            NewRole::new("Viewer", PermissionMap::uniform(&[Permission::Read]))
                .with_description("Limited access"),
        ];

        for draft in default_roles {
            let id = state.fresh_id();
            state.roles.push(Role::from_draft(id, draft));
        }

        let admin = User::from_draft(
            state.fresh_id(),
            Utc::now(),
            NewUser {
                role_id: state.roles[0].id,
                ..admin
            },
        );

        debug!(user_id = %admin.id, "Seeded admin user as session actor");
        state.current_user_id = Some(admin.id);
        state.users.push(admin);
        Ok(())
    }

    /// Store configuration
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    /// Take a consistent copy of users, roles and the session actor
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read();
        StoreSnapshot {
            users: state.users.clone(),
            roles: state.roles.clone(),
            current_user_id: state.current_user_id,
        }
    }
}
