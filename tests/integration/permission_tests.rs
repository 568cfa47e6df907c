//! Role permission administration tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use hayat_portal::auth::{Capability, PermissionSet, Role};
    use hayat_portal::utils::error::PortalError;

    #[tokio::test]
    async fn test_admin_keeps_manage_roles() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let before = assert_ok!(portal.service.my_permissions(&admin).await);

        let stripped: PermissionSet = [Capability::ManageWishes].into_iter().collect();
        let err = assert_err!(
            portal
                .service
                .update_role_permissions(&admin, Role::Admin, &stripped)
                .await
        );
        assert!(matches!(err, PortalError::LockedCapability(_)));

        let after = assert_ok!(portal.db.db().find_role_permissions(Role::Admin).await);
        assert_eq!(after, Some(before));
    }

    #[tokio::test]
    async fn test_admin_set_can_lose_unlocked_capability() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let mut reduced = PermissionSet::default_for(Role::Admin);
        reduced.remove(Capability::ManageSettings);
        assert_ok!(
            portal
                .service
                .update_role_permissions(&admin, Role::Admin, &reduced)
                .await
        );

        let err = assert_err!(
            portal
                .service
                .update_site_setting(&admin, "hero_title", "Merhaba")
                .await
        );
        assert!(matches!(err, PortalError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_granting_member_capability() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;

        assert!(portal.auth.require(&member, Capability::ManageTeams).await.is_err());

        let mut widened = PermissionSet::default_for(Role::Member);
        widened.insert(Capability::ManageTeams);
        assert_ok!(
            portal
                .service
                .update_role_permissions(&admin, Role::Member, &widened)
                .await
        );

        assert_ok!(portal.auth.require(&member, Capability::ManageTeams).await);
        assert_ok!(portal.service.create_team(&member, "Kermes").await);
    }

    #[tokio::test]
    async fn test_member_cannot_edit_roles() {
        let portal = TestPortal::new().await;
        let member = portal.actor(Role::Member).await;

        let everything: PermissionSet = Capability::ALL.into_iter().collect();
        let err = assert_err!(
            portal
                .service
                .update_role_permissions(&member, Role::Member, &everything)
                .await
        );
        assert!(matches!(err, PortalError::Unauthorized(_)));
        assert_eq!(
            assert_ok!(portal.service.my_permissions(&member).await),
            PermissionSet::default_for(Role::Member)
        );
    }

    #[tokio::test]
    async fn test_role_permissions_lists_seeded_roles() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let all = assert_ok!(portal.service.role_permissions(&admin).await);
        assert_eq!(all.len(), Role::ALL.len());
        for entry in &all {
            assert_eq!(entry.permissions, PermissionSet::default_for(entry.role));
        }
        assert!(
            all.iter()
                .find(|e| e.role == Role::User)
                .is_some_and(|e| e.permissions.is_empty())
        );
    }

    #[tokio::test]
    async fn test_stored_tokens_round_trip_through_json() {
        let portal = TestPortal::new().await;
        let set = assert_ok!(PermissionSet::from_tokens(&["MANAGE_EVENTS", "MANAGE_FEEDBACK"]));
        assert_ok!(portal.db.db().upsert_role_permissions(Role::Member, &set).await);

        let stored = assert_ok!(portal.db.db().find_role_permissions(Role::Member).await);
        assert_eq!(stored, Some(set));

        let listed = assert_ok!(portal.db.db().list_role_permissions().await);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].role, Role::Member);
    }
}
