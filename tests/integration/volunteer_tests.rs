//! Volunteer application tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use crate::{assert_err, assert_ok};
    use hayat_portal::auth::{Actor, Role};
    use hayat_portal::core::models::{
        ApplicationForm, ApplicationStatus, NewQuestion, VOLUNTEER_APPLICATIONS_OPEN,
    };
    use hayat_portal::utils::error::PortalError;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    async fn open_applications(portal: &TestPortal, admin: &Actor) {
        assert_ok!(
            portal
                .service
                .update_site_setting(admin, VOLUNTEER_APPLICATIONS_OPEN, "true")
                .await
        );
    }

    fn question(text: &str, position: i32) -> NewQuestion {
        NewQuestion {
            text: text.to_string(),
            position,
        }
    }

    #[tokio::test]
    async fn test_applications_closed_by_default() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let volunteer = portal.actor(Role::User).await;
        let team = assert_ok!(portal.service.create_team(&admin, "Kermes").await);

        let form = ApplicationForm {
            team_id: team.id,
            answers: BTreeMap::new(),
        };
        let err = assert_err!(portal.service.submit_application(&volunteer, &form).await);
        assert!(matches!(err, PortalError::Conflict(_)));
        assert!(assert_ok!(portal.service.my_application(&volunteer).await).is_none());
    }

    #[tokio::test]
    async fn test_submit_keeps_active_answers_once_per_user() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let volunteer = portal.actor(Role::User).await;
        let team = assert_ok!(portal.service.create_team(&admin, "Hastane Ziyaretleri").await);
        open_applications(&portal, &admin).await;

        let why = assert_ok!(portal.service.create_volunteer_question(&admin, &question("Neden?", 2)).await);
        let when = assert_ok!(portal.service.create_volunteer_question(&admin, &question("Ne zaman?", 1)).await);
        let retired = assert_ok!(portal.service.create_volunteer_question(&admin, &question("Eski", 0)).await);
        assert_ok!(
            portal
                .service
                .set_volunteer_question_active(&admin, retired.id, false)
                .await
        );

        let questions = assert_ok!(portal.service.volunteer_questions().await);
        let texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["Ne zaman?", "Neden?"]);
        assert_eq!(assert_ok!(portal.service.all_volunteer_questions(&admin).await).len(), 3);

        let mut answers = BTreeMap::new();
        answers.insert(why.id, " Yardım etmek ".to_string());
        answers.insert(when.id, "   ".to_string());
        answers.insert(retired.id, "Cevap".to_string());
        answers.insert(Uuid::new_v4(), "Bilinmeyen".to_string());
        let form = ApplicationForm {
            team_id: team.id,
            answers,
        };

        let application = assert_ok!(portal.service.submit_application(&volunteer, &form).await);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.team_name.as_deref(), Some("Hastane Ziyaretleri"));
        assert_eq!(application.answers.len(), 1);
        assert_eq!(application.answers[0].question, "Neden?");
        assert_eq!(application.answers[0].answer, "Yardım etmek");

        let err = assert_err!(portal.service.submit_application(&volunteer, &form).await);
        assert!(matches!(err, PortalError::Conflict(_)));

        let mine = assert_ok!(portal.service.my_application(&volunteer).await);
        assert_eq!(mine.map(|a| a.id), Some(application.id));
    }

    #[tokio::test]
    async fn test_application_to_missing_team_is_not_found() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let volunteer = portal.actor(Role::User).await;
        open_applications(&portal, &admin).await;

        let form = ApplicationForm {
            team_id: Uuid::new_v4(),
            answers: BTreeMap::new(),
        };
        let err = assert_err!(portal.service.submit_application(&volunteer, &form).await);
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_review_requires_manage_teams() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let member = portal.actor(Role::Member).await;
        let volunteer = portal.actor(Role::User).await;
        let team = assert_ok!(portal.service.create_team(&admin, "Kermes").await);
        open_applications(&portal, &admin).await;

        let application = assert_ok!(
            portal
                .service
                .submit_application(
                    &volunteer,
                    &ApplicationForm {
                        team_id: team.id,
                        answers: BTreeMap::new(),
                    },
                )
                .await
        );

        let err = assert_err!(portal.service.list_applications(&member).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
        let err = assert_err!(
            portal
                .service
                .review_application(&member, application.id, ApplicationStatus::Approved)
                .await
        );
        assert!(matches!(err, PortalError::Unauthorized(_)));

        let reviewed = assert_ok!(
            portal
                .service
                .review_application(&admin, application.id, ApplicationStatus::Approved)
                .await
        );
        assert_eq!(reviewed.status, ApplicationStatus::Approved);
        assert_eq!(assert_ok!(portal.service.list_applications(&admin).await).len(), 1);
    }

    #[tokio::test]
    async fn test_team_and_user_deletes_remove_applications() {
        let portal = TestPortal::new().await;
        let admin = portal.actor(Role::Admin).await;
        let first = portal.actor(Role::User).await;
        let second = portal.actor(Role::User).await;
        let kermes = assert_ok!(portal.service.create_team(&admin, "Kermes").await);
        let okul = assert_ok!(portal.service.create_team(&admin, "Okul Ziyaretleri").await);
        open_applications(&portal, &admin).await;

        for (actor, team) in [(&first, kermes.id), (&second, okul.id)] {
            let form = ApplicationForm {
                team_id: team,
                answers: BTreeMap::new(),
            };
            assert_ok!(portal.service.submit_application(actor, &form).await);
        }

        assert_ok!(portal.service.delete_team(&admin, kermes.id).await);
        assert!(assert_ok!(portal.service.my_application(&first).await).is_none());

        assert_ok!(portal.service.delete_user(&admin, second.id).await);
        assert!(assert_ok!(portal.service.list_applications(&admin).await).is_empty());
    }
}
