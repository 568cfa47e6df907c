//! Report and tag tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use hayat_portal::auth::Role;
    use hayat_portal::core::models::{MemberAssignment, NewReport};
    use hayat_portal::services::paths;
    use hayat_portal::utils::error::PortalError;
    use uuid::Uuid;

    fn report(title: &str, tag_ids: Vec<Uuid>) -> NewReport {
        NewReport {
            title: title.to_string(),
            description: Some("  Aylık faaliyet özeti ".to_string()),
            file_url: "https://cdn.example.org/raporlar/mart.pdf".to_string(),
            tag_ids,
        }
    }

    #[tokio::test]
    async fn test_tags_sorted_and_cached() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        assert_ok!(portal.service.create_tag(&admin, "Ziyaret").await);
        assert_ok!(portal.service.create_tag(&admin, "Bütçe").await);

        let tags = assert_ok!(portal.service.list_tags().await);
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bütçe", "Ziyaret"]);
        assert!(portal.storage.cache().contains(paths::REPORTS, "tags").await);

        let err = assert_err!(portal.service.create_tag(&admin, " Bütçe ").await);
        assert!(matches!(err, PortalError::Conflict(_)));

        assert_ok!(portal.service.delete_tag(&admin, tags[0].id).await);
        assert!(!portal.storage.cache().contains(paths::REPORTS, "tags").await);
        assert_eq!(assert_ok!(portal.service.list_tags().await).len(), 1);
    }

    #[tokio::test]
    async fn test_member_cannot_manage_tags_by_default() {
        let portal = TestPortal::new().await;
        let member = portal.actor(Role::Member).await;

        let err = assert_err!(portal.service.create_tag(&member, "Bütçe").await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
        assert!(assert_ok!(portal.service.list_tags().await).is_empty());
    }

    #[tokio::test]
    async fn test_report_lifecycle() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let budget = assert_ok!(portal.service.create_tag(&admin, "Bütçe").await);
        let visits = assert_ok!(portal.service.create_tag(&admin, "Ziyaret").await);

        let created = assert_ok!(
            portal
                .service
                .create_report(&admin, &report("Mart raporu", vec![visits.id, budget.id, budget.id]))
                .await
        );
        assert_eq!(created.description.as_deref(), Some("Aylık faaliyet özeti"));
        assert_eq!(created.uploaded_by, Some(admin.id));
        assert_eq!(created.uploader_name.as_deref(), Some("Test Gönüllü"));
        let tag_names: Vec<&str> = created.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tag_names, vec!["Bütçe", "Ziyaret"]);

        // Deleting a tag detaches it from the report
        assert_ok!(portal.service.delete_tag(&admin, budget.id).await);
        let reports = assert_ok!(portal.service.list_reports(&admin).await);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].tags, vec![visits.clone()]);

        assert_ok!(portal.service.delete_report(&admin, created.id).await);
        assert!(assert_ok!(portal.service.list_reports(&admin).await).is_empty());

        let err = assert_err!(portal.service.delete_report(&admin, created.id).await);
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_report_with_unknown_tag_is_not_stored() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let err = assert_err!(
            portal
                .service
                .create_report(&admin, &report("Nisan", vec![Uuid::new_v4()]))
                .await
        );
        assert!(matches!(err, PortalError::NotFound(_)));
        assert!(assert_ok!(portal.service.list_reports(&admin).await).is_empty());
    }

    #[tokio::test]
    async fn test_report_link_must_be_url_or_path() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let mut input = report("Mayıs", Vec::new());
        input.file_url = "ftp://files.example.org/mayis.pdf".to_string();
        let err = assert_err!(portal.service.create_report(&admin, &input).await);
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reports_visible_to_team_members_only() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let volunteer = portal.actor(Role::User).await;

        assert_ok!(portal.service.create_report(&admin, &report("Haziran", Vec::new())).await);

        let err = assert_err!(portal.service.list_reports(&volunteer).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));

        let team = assert_ok!(portal.service.create_team(&admin, "Okul Ziyaretleri").await);
        let role = assert_ok!(portal.service.create_team_role(&admin, "Üye").await);
        assert_ok!(
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

        assert_eq!(assert_ok!(portal.service.list_reports(&volunteer).await).len(), 1);
    }

    #[tokio::test]
    async fn test_reports_outlive_their_uploader() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let editor = portal.actor(Role::Admin).await;

        assert_ok!(portal.service.create_report(&editor, &report("Temmuz", Vec::new())).await);
        assert_ok!(portal.service.delete_user(&admin, editor.id).await);

        let reports = assert_ok!(portal.service.list_reports(&admin).await);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].uploaded_by, None);
        assert_eq!(reports[0].uploader_name, None);
    }
}
