//! Access control store integration tests
//!
//! Scenarios across roles, users and the session actor, exercised through
//! the public API only.

#[cfg(test)]
mod tests {
    use crate::common::{PermissionAssertions, RoleFactory, StoreFixture, UserFactory};
    use crate::{assert_err, assert_ok};
    use rbac_dashboard::{
        AccessControlStore, Permission, PermissionMap, RbacError, Resource, RoleUpdate,
        UserStatus, UserUpdate,
    };
    use std::sync::Arc;
    use std::thread;

    // ==================== Seed State ====================

    #[test]
    fn test_seeded_admin_holds_every_permission() {
        let fixture = StoreFixture::seeded();
        for resource in Resource::ALL {
            for permission in Permission::ALL {
                fixture.store.assert_granted(resource, permission);
            }
        }
        assert_eq!(fixture.store.effective_permissions(), PermissionMap::full());
    }

    #[test]
    fn test_seeded_editor_creates_and_reads() {
        let fixture = StoreFixture::seeded();
        fixture.act_as(fixture.editor_id);

        fixture.store.assert_granted(Resource::Roles, Permission::Create);
        fixture.store.assert_granted(Resource::Permissions, Permission::Read);
        fixture.store.assert_denied(Resource::Users, Permission::Update);
        fixture.store.assert_denied(Resource::Users, Permission::Delete);
    }

    #[test]
    fn test_seeded_viewer_reads_only() {
        let fixture = StoreFixture::seeded();
        fixture.act_as(fixture.viewer_id);

        fixture.store.assert_granted(Resource::Users, Permission::Read);
        fixture.store.assert_denied(Resource::Users, Permission::Delete);
        fixture.store.assert_denied(Resource::Roles, Permission::Create);
    }

    #[test]
    fn test_empty_store_denies_everything() {
        let store = AccessControlStore::empty();
        store.assert_denies_everything();
        assert!(store.session_view().user.is_none());
    }

    // ==================== Roles ====================

    #[test]
    fn test_support_role_scenario() {
        let fixture = StoreFixture::seeded();
        let support = assert_ok!(fixture.store.add_role(RoleFactory::support()));

        fixture.store.assert_granted(Resource::Users, Permission::Read);

        fixture.act_as(support.id);
        fixture.store.assert_granted(Resource::Users, Permission::Read);
        fixture.store.assert_denied(Resource::Users, Permission::Update);
        fixture.store.assert_denied(Resource::Roles, Permission::Read);
    }

    #[test]
    fn test_role_without_grants() {
        let fixture = StoreFixture::seeded();
        let role = assert_ok!(fixture.store.add_role(RoleFactory::empty("Guest")));
        assert_eq!(role.description, "");

        fixture.act_as(role.id);
        fixture.store.assert_denies_everything();
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let fixture = StoreFixture::seeded();
        let role = assert_ok!(fixture.store.add_role(RoleFactory::empty("Auditor")));

        let mut grants = role.permissions.clone();
        grants.grant_all(Resource::Users);
        grants.set(Resource::Users, Permission::Delete, false);
        assert_ok!(
            fixture
                .store
                .update_role(role.id, RoleUpdate::default().permissions(grants))
        );

        fixture.act_as(role.id);
        fixture.store.assert_granted(Resource::Users, Permission::Create);
        fixture.store.assert_granted(Resource::Users, Permission::Update);
        fixture.store.assert_denied(Resource::Users, Permission::Delete);
        fixture.store.assert_denied(Resource::Roles, Permission::Read);
    }

    #[test]
    fn test_renaming_role_is_visible_in_user_views() {
        let fixture = StoreFixture::seeded();
        assert_ok!(
            fixture
                .store
                .update_role(fixture.admin_id, RoleUpdate::default().name("Superuser"))
        );

        let views = fixture.store.list_user_views();
        assert_eq!(views[0].role_name, "Superuser");
        assert_eq!(fixture.store.role_name(fixture.admin_id), "Superuser");
    }

    #[test]
    fn test_deleting_actor_role_denies_without_error() {
        let fixture = StoreFixture::seeded();
        assert_ok!(fixture.store.delete_role(fixture.admin_id));

        fixture.store.assert_denies_everything();
        let actor = fixture.store.current_user().unwrap();
        assert_eq!(actor.id, fixture.admin_user_id);
        assert_eq!(fixture.store.role_name(actor.role_id), "Unknown Role");

        // Reassigning a live role restores access
        assert_ok!(fixture.store.update_user(
            actor.id,
            UserUpdate::default().role_id(fixture.viewer_id)
        ));
        fixture.store.assert_granted(Resource::Users, Permission::Read);
    }

    #[test]
    fn test_idempotent_and_strict_deletes() {
        let fixture = StoreFixture::seeded();
        assert_ok!(fixture.store.delete_role(fixture.editor_id));
        assert_ok!(fixture.store.delete_role(fixture.editor_id));
        assert_eq!(fixture.store.list_roles().len(), 2);

        let strict = StoreFixture::strict();
        assert_ok!(strict.store.delete_role(strict.editor_id));
        let err = assert_err!(strict.store.delete_role(strict.editor_id));
        assert!(matches!(err, RbacError::NotFound(_)));
    }

    // ==================== Users ====================

    #[test]
    fn test_user_round_trip_preserves_draft() {
        let fixture = StoreFixture::seeded();
        let draft = UserFactory::inactive(fixture.editor_id);

        let user = assert_ok!(fixture.store.add_user(draft.clone()));
        let read_back = fixture.store.get_user(user.id).unwrap();

        assert_eq!(read_back.name, draft.name);
        assert_eq!(read_back.email, draft.email);
        assert_eq!(read_back.role_id, draft.role_id);
        assert_eq!(read_back.status, UserStatus::Inactive);
        assert!(!read_back.is_active());
        assert_eq!(read_back.created_at, user.created_at);
    }

    #[test]
    fn test_user_values_are_trimmed() {
        let fixture = StoreFixture::seeded();
        let mut draft = UserFactory::with_email(fixture.viewer_id, "  padded@example.com ");
        draft.name = "  Padded  ".to_string();

        let user = assert_ok!(fixture.store.add_user(draft));
        assert_eq!(user.name, "Padded");
        assert_eq!(user.email, "padded@example.com");
    }

    #[test]
    fn test_rejected_user_leaves_store_unchanged() {
        let fixture = StoreFixture::seeded();
        let before = fixture.store.snapshot();

        let err = assert_err!(
            fixture
                .store
                .add_user(UserFactory::with_email(fixture.viewer_id, "broken"))
        );
        assert!(matches!(err, RbacError::Validation(_)));

        let err = assert_err!(fixture.store.update_user(
            fixture.admin_user_id,
            UserUpdate::default().status(UserStatus::Inactive).email("")
        ));
        assert!(matches!(err, RbacError::Validation(_)));

        assert_eq!(fixture.store.snapshot(), before);
    }

    #[test]
    fn test_deleting_actor_denies_everything() {
        let fixture = StoreFixture::seeded();
        let user_id = fixture.act_as(fixture.editor_id);
        fixture.store.assert_granted(Resource::Users, Permission::Create);

        assert_ok!(fixture.store.delete_user(user_id));

        fixture.store.assert_denies_everything();
        assert!(fixture.store.current_user().is_none());

        assert_ok!(fixture.store.set_current_user(fixture.admin_user_id));
        fixture.store.assert_granted(Resource::Users, Permission::Delete);
    }

    // ==================== Concurrency ====================

    #[test]
    fn test_readers_never_see_partial_role_updates() {
        let fixture = StoreFixture::seeded();
        let store = Arc::new(fixture.store);
        let viewer_id = fixture.viewer_id;

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..200 {
                    let update = if i % 2 == 0 {
                        RoleUpdate::default()
                            .name("Viewer+")
                            .permissions(PermissionMap::full())
                    } else {
                        RoleUpdate::default()
                            .name("Viewer")
                            .permissions(PermissionMap::uniform(&[Permission::Read]))
                    };
                    store.update_role(viewer_id, update).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let role = store.get_role(viewer_id).unwrap();
                        let expected = if role.name == "Viewer+" {
                            PermissionMap::full()
                        } else {
                            PermissionMap::uniform(&[Permission::Read])
                        };
                        assert_eq!(role.permissions, expected);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
