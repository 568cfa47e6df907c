//! Access gate tests through the portal services

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use chrono::NaiveDate;
    use hayat_portal::auth::{Capability, PermissionSet, Role};
    use hayat_portal::core::models::{EventInput, NewVisit, NewWish};
    use hayat_portal::utils::error::PortalError;

    fn wish() -> NewWish {
        NewWish {
            title: "Okul çantası".to_string(),
            description: "İlkokul öğrencisi için".to_string(),
            url: None,
        }
    }

    fn visit(day: u32) -> NewVisit {
        NewVisit {
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            experience: "Deneyimli".to_string(),
            note: Some("Sabah".to_string()),
        }
    }

    /// authorize(R, C) holds exactly when C is in the stored set of R
    #[tokio::test]
    async fn test_require_matches_set_membership() {
        let portal = TestPortal::new().await;
        let odd: PermissionSet = Capability::ALL.into_iter().step_by(2).collect();
        assert_ok!(
            portal
                .db
                .db()
                .upsert_role_permissions(Role::Member, &odd)
                .await
        );

        for role in Role::ALL {
            let actor = portal.actor(role).await;
            let set = assert_ok!(portal.auth.permissions_for(role).await).unwrap_or_default();
            for capability in Capability::ALL {
                let allowed = portal.auth.require(&actor, capability).await.is_ok();
                assert_eq!(allowed, set.contains(capability), "{} {}", role, capability);
            }
        }
    }

    #[tokio::test]
    async fn test_member_with_wishes_only() {
        let portal = TestPortal::new().await;
        let only_wishes: PermissionSet = [Capability::ManageWishes].into_iter().collect();
        assert_ok!(
            portal
                .db
                .db()
                .upsert_role_permissions(Role::Member, &only_wishes)
                .await
        );
        let member = portal.actor(Role::Member).await;

        assert_ok!(portal.service.create_wish(&member, &wish()).await);

        let input = EventInput {
            title: "Bahar şenliği".to_string(),
            location: "Kampüs".to_string(),
            date: chrono::Utc::now(),
            cover_image: None,
        };
        let err = assert_err!(portal.service.create_event(&member, &input).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
        assert!(assert_ok!(portal.service.list_events().await).is_empty());
    }

    #[tokio::test]
    async fn test_visit_ownership() {
        let portal = TestPortal::new().await;
        let u1 = portal.actor(Role::User).await;
        let u2 = portal.actor(Role::User).await;

        let own = assert_ok!(portal.service.create_visit(&u1, &visit(3)).await);
        let theirs = assert_ok!(portal.service.create_visit(&u2, &visit(4)).await);

        assert_ok!(portal.service.delete_visit(&u1, own.id).await);
        let err = assert_err!(portal.service.delete_visit(&u1, theirs.id).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));

        let range = hayat_portal::core::models::VisitRange {
            start: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        };
        let remaining = assert_ok!(portal.service.list_visits(range).await);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, theirs.id);
    }

    #[tokio::test]
    async fn test_admin_cancels_any_visit() {
        let portal = TestPortal::new().await;
        let volunteer = portal.actor(Role::User).await;
        let admin = portal.actor(Role::Admin).await;

        let booked = assert_ok!(portal.service.create_visit(&volunteer, &visit(10)).await);
        assert_ok!(portal.service.delete_visit(&admin, booked.id).await);

        let err = assert_err!(portal.service.delete_visit(&admin, booked.id).await);
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_promotion_applies_on_next_request() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let user = portal.actor(Role::User).await;

        assert!(portal.auth.require(&user, Capability::ManageUsers).await.is_err());

        assert_ok!(portal.service.promote(&admin, user.id).await);
        let refreshed = portal.refresh(&user).await;
        assert_eq!(refreshed.role, Role::Admin);

        assert_ok!(portal.auth.require(&refreshed, Capability::ManageUsers).await);
        assert_ok!(portal.service.create_wish(&refreshed, &wish()).await);
    }

    #[tokio::test]
    async fn test_seeding_disabled_denies_everyone() {
        let portal = TestPortal::without_seeding().await;
        let admin = portal.actor(Role::Admin).await;

        let err = assert_err!(portal.service.create_wish(&admin, &wish()).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));

        let stored = assert_ok!(portal.db.db().find_role_permissions(Role::Admin).await);
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_deny_does_not_touch_store() {
        let portal = TestPortal::new().await;
        let user = portal.actor(Role::User).await;
        let admin = portal.actor(Role::Admin).await;
        let created = assert_ok!(portal.service.create_wish(&admin, &wish()).await);

        let err = assert_err!(portal.service.delete_wish(&user, created.id).await);
        assert!(err.is_access_denied());
        assert_eq!(assert_ok!(portal.service.list_wishes().await).len(), 1);
    }

    #[tokio::test]
    async fn test_profile_owner_or_admin() {
        let portal = TestPortal::new().await;
        let owner = portal.actor(Role::User).await;
        let other = portal.actor(Role::Member).await;

        let update = hayat_portal::core::models::ProfileUpdate {
            name: " Yeni İsim ".to_string(),
            title: Some("Gönüllü".to_string()),
            bio: None,
        };
        let updated = assert_ok!(portal.service.update_profile(&owner, owner.id, &update).await);
        assert_eq!(updated.name, "Yeni İsim");

        let err = assert_err!(portal.service.update_profile(&other, owner.id, &update).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
    }
}
