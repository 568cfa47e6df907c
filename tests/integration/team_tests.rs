//! Team, team role and membership tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use hayat_portal::auth::Role;
    use hayat_portal::core::models::MemberAssignment;
    use hayat_portal::utils::error::PortalError;

    #[tokio::test]
    async fn test_overview_order() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        for name in [
            "Basın ve Medya",
            "Okul Ziyaretleri",
            "Ahşap Atölyesi",
            "Yönetim & Denetim Kurulu",
            "Hastane Ziyaretleri",
        ] {
            assert_ok!(portal.service.create_team(&admin, name).await);
        }

        let overview = assert_ok!(portal.service.teams_overview().await);
        let names: Vec<&str> = overview.teams.iter().map(|t| t.team.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Yönetim & Denetim Kurulu",
                "Hastane Ziyaretleri",
                "Okul Ziyaretleri",
                "Ahşap Atölyesi",
                "Basın ve Medya",
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_team_conflicts() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        assert_ok!(portal.service.create_team(&admin, "Kermes").await);
        let err = assert_err!(portal.service.create_team(&admin, " Kermes ").await);
        assert!(matches!(err, PortalError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_assignment_upserts_and_deletes_cascade() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let alice = portal.actor(Role::User).await;
        let bob = portal.actor(Role::User).await;

        let team = assert_ok!(portal.service.create_team(&admin, "Onur Üyeleri").await);
        let lead = assert_ok!(portal.service.create_team_role(&admin, "Başkan").await);
        let helper = assert_ok!(portal.service.create_team_role(&admin, "Üye").await);

        for user in [alice.id, bob.id] {
            assert_ok!(
                portal
                    .service
                    .assign_member(
                        &admin,
                        &MemberAssignment {
                            user_id: user,
                            team_id: team.id,
                            role_id: helper.id,
                        },
                    )
                    .await
            );
        }
        let promoted = assert_ok!(
            portal
                .service
                .assign_member(
                    &admin,
                    &MemberAssignment {
                        user_id: alice.id,
                        team_id: team.id,
                        role_id: lead.id,
                    },
                )
                .await
        );
        assert_eq!(promoted.role_id, lead.id);

        let overview = assert_ok!(portal.service.teams_overview().await);
        assert_eq!(overview.members.len(), 2);
        assert_eq!(overview.teams[0].member_count, 2);

        assert_ok!(portal.service.delete_team_role(&admin, lead.id).await);
        let overview = assert_ok!(portal.service.teams_overview().await);
        assert_eq!(overview.members.len(), 1);
        assert_eq!(overview.members[0].user_id, bob.id);

        assert_ok!(portal.service.delete_team(&admin, team.id).await);
        let overview = assert_ok!(portal.service.teams_overview().await);
        assert!(overview.teams.is_empty());
        assert!(overview.members.is_empty());
        assert_eq!(overview.roles.len(), 1);
    }

    #[tokio::test]
    async fn test_assignment_to_missing_team_is_not_found() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let role = assert_ok!(portal.service.create_team_role(&admin, "Üye").await);

        let err = assert_err!(
            portal
                .service
                .assign_member(
                    &admin,
                    &MemberAssignment {
                        user_id: admin.id,
                        team_id: uuid::Uuid::new_v4(),
                        role_id: role.id,
                    },
                )
                .await
        );
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_member_role_cannot_manage_teams_by_default() {
        let portal = TestPortal::new().await;
        let member = portal.actor(Role::Member).await;

        let err = assert_err!(portal.service.create_team(&member, "Kermes").await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
    }
}
