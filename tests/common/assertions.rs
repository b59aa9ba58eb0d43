//! Custom test assertions
//!
//! Provides permission assertions for the access control store.

use rbac_dashboard::{AccessControlStore, Permission, Resource};

/// Assertions on what the session actor may do
pub trait PermissionAssertions {
    /// Assert the actor holds the permission
    fn assert_granted(&self, resource: Resource, permission: Permission);

    /// Assert the actor lacks the permission
    fn assert_denied(&self, resource: Resource, permission: Permission);

    /// Assert every pair is denied
    fn assert_denies_everything(&self);
}

impl PermissionAssertions for AccessControlStore {
    fn assert_granted(&self, resource: Resource, permission: Permission) {
        let check = self.check_permission(resource, permission);
        assert!(
            check.granted,
            "Expected {}.{} to be granted, denied with: {:?}",
            resource, permission, check.denial_reason
        );
    }

    fn assert_denied(&self, resource: Resource, permission: Permission) {
        assert!(
            !self.has_permission(resource, permission),
            "Expected {}.{} to be denied",
            resource,
            permission
        );
    }

    fn assert_denies_everything(&self) {
        for resource in Resource::ALL {
            for permission in Permission::ALL {
                self.assert_denied(resource, permission);
            }
        }
    }
}
