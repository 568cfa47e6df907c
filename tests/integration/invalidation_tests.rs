//! Cached pages refresh after user, membership and profile mutations

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestPortal;
    use hayat_portal::auth::Role;
    use hayat_portal::core::models::{
        ImageUpdate, MemberAssignment, NewWish, ProfileUpdate, WishStatus,
    };
    use hayat_portal::services::paths;
    use hayat_portal::utils::error::PortalError;

    /// Cache a marker entry under `path` so its invalidation can be observed
    async fn mark(portal: &TestPortal, path: &str) {
        let _: u64 = assert_ok!(
            portal
                .storage
                .cache()
                .get_or_load(path, "marker", || async { Ok::<_, PortalError>(1) })
                .await
        );
        assert!(portal.storage.cache().contains(path, "marker").await);
    }

    async fn marked(portal: &TestPortal, path: &str) -> bool {
        portal.storage.cache().contains(path, "marker").await
    }

    fn wish(title: &str) -> NewWish {
        NewWish {
            title: title.to_string(),
            description: "Çocuk servisi için".to_string(),
            url: None,
        }
    }

    #[tokio::test]
    async fn test_profile_rename_refreshes_member_and_wish_names() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;

        let team = assert_ok!(portal.service.create_team(&admin, "Kermes").await);
        let role = assert_ok!(portal.service.create_team_role(&admin, "Üye").await);
        assert_ok!(
            portal
                .service
                .assign_member(
                    &admin,
                    &MemberAssignment {
                        user_id: member.id,
                        team_id: team.id,
                        role_id: role.id,
                    },
                )
                .await
        );
        assert_ok!(portal.service.create_wish(&member, &wish("Boya kalemi")).await);

        let overview = assert_ok!(portal.service.teams_overview().await);
        assert_eq!(overview.members[0].user_name.as_deref(), Some("Test Gönüllü"));
        let wishes = assert_ok!(portal.service.list_wishes().await);
        assert_eq!(wishes[0].author_name.as_deref(), Some("Test Gönüllü"));

        assert_ok!(
            portal
                .service
                .update_profile(
                    &member,
                    member.id,
                    &ProfileUpdate {
                        name: "Yeni Ad".to_string(),
                        title: None,
                        bio: None,
                    },
                )
                .await
        );

        let overview = assert_ok!(portal.service.teams_overview().await);
        assert_eq!(overview.members[0].user_name.as_deref(), Some("Yeni Ad"));
        let wishes = assert_ok!(portal.service.list_wishes().await);
        assert_eq!(wishes[0].author_name.as_deref(), Some("Yeni Ad"));
    }

    #[tokio::test]
    async fn test_delete_user_refreshes_home_counts() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;

        let created = assert_ok!(portal.service.create_wish(&member, &wish("Mont")).await);
        assert_ok!(
            portal
                .service
                .update_wish_status(&admin, created.id, WishStatus::Completed)
                .await
        );
        assert_eq!(assert_ok!(portal.service.completed_wish_count().await), 1);
        assert!(portal.storage.cache().contains(paths::HOME, "completed_wishes").await);

        assert_ok!(portal.service.delete_user(&admin, member.id).await);

        assert!(!portal.storage.cache().contains(paths::HOME, "completed_wishes").await);
        assert_eq!(assert_ok!(portal.service.completed_wish_count().await), 0);
        assert!(assert_ok!(portal.service.list_wishes().await).is_empty());
    }

    #[tokio::test]
    async fn test_change_role_invalidates_admin_only() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let user = portal.actor(Role::User).await;

        mark(&portal, paths::ADMIN).await;
        mark(&portal, paths::TEAMS).await;

        assert_ok!(portal.service.change_role(&admin, user.id, Role::Member).await);

        assert!(!marked(&portal, paths::ADMIN).await);
        assert!(marked(&portal, paths::TEAMS).await);
    }

    #[tokio::test]
    async fn test_assign_and_remove_member_refresh_overview() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let volunteer = portal.actor(Role::User).await;

        let team = assert_ok!(portal.service.create_team(&admin, "Hastane Ziyaretleri").await);
        let role = assert_ok!(portal.service.create_team_role(&admin, "Gönüllü").await);
        assert!(assert_ok!(portal.service.teams_overview().await).members.is_empty());
        mark(&portal, paths::ADMIN).await;

        let membership = assert_ok!(
            portal
                .service
                .assign_member(
                    &admin,
                    &MemberAssignment {
                        user_id: volunteer.id,
                        team_id: team.id,
                        role_id: role.id,
                    },
                )
                .await
        );
        assert!(!marked(&portal, paths::ADMIN).await);
        let overview = assert_ok!(portal.service.teams_overview().await);
        assert_eq!(overview.members.len(), 1);
        assert_eq!(overview.teams[0].member_count, 1);

        assert_ok!(portal.service.remove_member(&admin, membership.id).await);
        let overview = assert_ok!(portal.service.teams_overview().await);
        assert!(overview.members.is_empty());
        assert_eq!(overview.teams[0].member_count, 0);
    }

    #[tokio::test]
    async fn test_update_image_invalidates_profile() {
        let portal = TestPortal::new().await;
        let user = portal.actor(Role::User).await;
        mark(&portal, paths::PROFILE).await;

        let updated = assert_ok!(
            portal
                .service
                .update_user_image(
                    &user,
                    user.id,
                    &ImageUpdate {
                        image_url: "/uploads/avatar.png".to_string(),
                    },
                )
                .await
        );

        assert_eq!(updated.image.as_deref(), Some("/uploads/avatar.png"));
        assert!(!marked(&portal, paths::PROFILE).await);
    }

    #[tokio::test]
    async fn test_denied_mutation_keeps_cache() {
        let portal = TestPortal::new().await;
        let user = portal.actor(Role::User).await;
        let other = portal.actor(Role::User).await;
        mark(&portal, paths::ADMIN).await;
        mark(&portal, paths::PROFILE).await;

        assert!(portal.service.delete_user(&user, other.id).await.is_err());
        assert!(
            portal
                .service
                .update_user_image(
                    &user,
                    other.id,
                    &ImageUpdate {
                        image_url: "https://example.org/a.png".to_string(),
                    },
                )
                .await
                .is_err()
        );

        assert!(marked(&portal, paths::ADMIN).await);
        assert!(marked(&portal, paths::PROFILE).await);
    }
}
