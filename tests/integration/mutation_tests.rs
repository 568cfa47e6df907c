//! Mutation, validation and cache invalidation tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use chrono::{NaiveDate, TimeZone, Utc};
    use hayat_portal::auth::Role;
    use hayat_portal::core::models::{
        ContactInfo, EventInput, NewContactMessage, NewProject, NewVisit, NewWish, WishStatus,
    };
    use hayat_portal::services::paths;
    use hayat_portal::utils::error::PortalError;
    use uuid::Uuid;

    fn event(title: &str, day: u32) -> EventInput {
        EventInput {
            title: title.to_string(),
            location: "Rize".to_string(),
            date: Utc.with_ymd_and_hms(2025, 5, day, 10, 0, 0).unwrap(),
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_visit_conflicts() {
        let portal = TestPortal::new().await;
        let volunteer = portal.actor(Role::User).await;
        let input = NewVisit {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            experience: "İlk kez".to_string(),
            note: None,
        };

        assert_ok!(portal.service.create_visit(&volunteer, &input).await);
        let err = assert_err!(portal.service.create_visit(&volunteer, &input).await);
        assert!(matches!(err, PortalError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_reversed_visit_range_rejected() {
        let portal = TestPortal::new().await;
        let range = hayat_portal::core::models::VisitRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let err = assert_err!(portal.service.list_visits(range).await);
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[tokio::test]
    async fn test_contact_messages() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;

        let message = assert_ok!(
            portal
                .service
                .submit_contact_message(&NewContactMessage {
                    name: "Ali".to_string(),
                    email: "Ali@Example.org".to_string(),
                    subject: None,
                    message: "Gönüllü olmak istiyorum".to_string(),
                })
                .await
        );
        assert_eq!(message.subject, "Konusuz");
        assert_eq!(message.email, "ali@example.org");

        let err = assert_err!(portal.service.list_messages(&member).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));

        let toggled = assert_ok!(portal.service.toggle_message_read(&admin, message.id).await);
        assert!(toggled.is_read);
        let toggled = assert_ok!(portal.service.toggle_message_read(&admin, message.id).await);
        assert!(!toggled.is_read);

        assert_ok!(portal.service.delete_message(&admin, message.id).await);
        assert!(assert_ok!(portal.service.list_messages(&admin).await).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_contact_email_rejected() {
        let portal = TestPortal::new().await;
        let err = assert_err!(
            portal
                .service
                .submit_contact_message(&NewContactMessage {
                    name: "Ali".to_string(),
                    email: "not-an-email".to_string(),
                    subject: Some("Soru".to_string()),
                    message: "Merhaba".to_string(),
                })
                .await
        );
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[tokio::test]
    async fn test_contact_info_default_and_update() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        assert_eq!(
            assert_ok!(portal.service.contact_info().await),
            ContactInfo::default()
        );
        assert!(portal.storage.cache().contains(paths::CONTACT, "info").await);

        let updated = ContactInfo {
            email: "yeni@example.org".to_string(),
            phone: "+90 555 000 00 00".to_string(),
            address: "Merkez".to_string(),
        };
        assert_ok!(portal.service.update_contact_info(&admin, &updated).await);
        assert!(!portal.storage.cache().contains(paths::CONTACT, "info").await);
        assert_eq!(assert_ok!(portal.service.contact_info().await), updated);
    }

    #[tokio::test]
    async fn test_feedback_trimmed_and_required() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let feedback = assert_ok!(portal.service.submit_feedback("\n  Teşekkürler  ").await);
        assert_eq!(feedback.content, "Teşekkürler");

        let err = assert_err!(portal.service.submit_feedback(" \t ").await);
        assert!(matches!(err, PortalError::Validation(_)));

        assert_eq!(assert_ok!(portal.service.list_feedback(&admin).await).len(), 1);
        assert_ok!(portal.service.delete_feedback(&admin, feedback.id).await);
        assert!(assert_ok!(portal.service.list_feedback(&admin).await).is_empty());
    }

    #[tokio::test]
    async fn test_events_sorted_and_cache_invalidated() {
        let portal = TestPortal::new().await;
        let member = portal.actor(Role::Member).await;

        assert_ok!(portal.service.create_event(&member, &event("Sonra", 20)).await);
        assert_ok!(portal.service.create_event(&member, &event("Önce", 2)).await);

        let events = assert_ok!(portal.service.list_events().await);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Önce");
        assert_eq!(assert_ok!(portal.service.event_count().await), 2);
        assert!(portal.storage.cache().contains(paths::EVENTS, "list").await);
        assert!(portal.storage.cache().contains(paths::HOME, "event_count").await);

        let updated = assert_ok!(
            portal
                .service
                .update_event(&member, events[1].id, &event("Sonra (ertelendi)", 25))
                .await
        );
        assert_eq!(updated.title, "Sonra (ertelendi)");
        assert!(!portal.storage.cache().contains(paths::EVENTS, "list").await);
        assert!(!portal.storage.cache().contains(paths::HOME, "event_count").await);

        assert_ok!(portal.service.delete_event(&member, events[0].id).await);
        assert_eq!(assert_ok!(portal.service.event_count().await), 1);
    }

    #[tokio::test]
    async fn test_unrelated_paths_stay_cached() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        assert_ok!(portal.service.list_projects().await);
        assert_ok!(portal.service.teams_overview().await);

        assert_ok!(
            portal
                .service
                .create_project(
                    &admin,
                    &NewProject {
                        title: "Kütüphane".to_string(),
                        description: "Köy okuluna kitap".to_string(),
                        status: None,
                        image: None,
                    },
                )
                .await
        );

        assert!(!portal.storage.cache().contains(paths::PROJECTS, "list").await);
        assert!(portal.storage.cache().contains(paths::TEAMS, "overview").await);

        let projects = assert_ok!(portal.service.list_projects().await);
        assert_eq!(projects[0].status, "ONGOING");
    }

    #[tokio::test]
    async fn test_wish_lifecycle() {
        let portal = TestPortal::new().await;
        let member = portal.actor(Role::Member).await;

        let wish = assert_ok!(
            portal
                .service
                .create_wish(
                    &member,
                    &NewWish {
                        title: "  Bisiklet ".to_string(),
                        description: "10 yaş".to_string(),
                        url: Some("https://example.org/bisiklet".to_string()),
                    },
                )
                .await
        );
        assert_eq!(wish.title, "Bisiklet");
        assert_eq!(wish.user_id, member.id);
        assert_eq!(wish.status, WishStatus::Pending);

        let listed = assert_ok!(portal.service.list_wishes().await);
        assert_eq!(listed[0].author_name.as_deref(), Some("Test Gönüllü"));

        let wish = assert_ok!(
            portal
                .service
                .update_wish_status(&member, wish.id, WishStatus::InProcess)
                .await
        );
        assert_eq!(wish.status, WishStatus::InProcess);

        assert_ok!(portal.service.delete_wish(&member, wish.id).await);
        let err = assert_err!(portal.service.delete_wish(&member, wish.id).await);
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_wish_status_update_is_not_found() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;

        let err = assert_err!(
            portal
                .service
                .update_wish_status(&admin, Uuid::new_v4(), WishStatus::Completed)
                .await
        );
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_removes_owned_rows() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;

        assert_ok!(
            portal
                .service
                .create_wish(
                    &member,
                    &NewWish {
                        title: "Mont".to_string(),
                        description: "Kışlık".to_string(),
                        url: None,
                    },
                )
                .await
        );
        assert_ok!(
            portal
                .service
                .create_visit(
                    &member,
                    &NewVisit {
                        date: NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(),
                        experience: "Var".to_string(),
                        note: None,
                    },
                )
                .await
        );

        assert_ok!(portal.service.delete_user(&admin, member.id).await);

        assert!(assert_ok!(portal.service.list_wishes().await).is_empty());
        let users = assert_ok!(portal.service.list_users(&admin).await);
        assert!(users.iter().all(|u| u.id != member.id));
    }

    #[tokio::test]
    async fn test_site_settings_and_stats() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let user = portal.actor(Role::User).await;

        assert!(assert_ok!(portal.service.site_settings().await).is_empty());
        assert_ok!(
            portal
                .service
                .update_site_setting(&admin, "hero_title", "Bir Dilek Tut")
                .await
        );
        assert_ok!(
            portal
                .service
                .update_site_setting(&admin, "hero_title", "Bir Umut Ol")
                .await
        );

        let settings = assert_ok!(portal.service.site_settings().await);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].value, "Bir Umut Ol");

        let stats = assert_ok!(portal.service.dashboard_stats(&admin).await);
        assert_eq!(stats.users, 2);
        let err = assert_err!(portal.service.dashboard_stats(&user).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
    }
}
