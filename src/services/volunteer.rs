//! Volunteer applications

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::{
    ApplicationAnswer, ApplicationForm, ApplicationStatus, NewQuestion, VOLUNTEER_APPLICATIONS_OPEN,
    VolunteerApplication, VolunteerQuestion,
};
use crate::utils::InputValidator;
use crate::utils::error::{PortalError, Result};
use tracing::info;
use uuid::Uuid;

impl PortalService {
    /// Active questions of the application form
    pub async fn volunteer_questions(&self) -> Result<Vec<VolunteerQuestion>> {
        self.storage.db().list_volunteer_questions(false).await
    }

    /// Every question, inactive ones included
    pub async fn all_volunteer_questions(&self, actor: &Actor) -> Result<Vec<VolunteerQuestion>> {
        self.auth.require(actor, Capability::ManageTeams).await?;
        self.storage.db().list_volunteer_questions(true).await
    }

    pub async fn create_volunteer_question(&self, actor: &Actor, input: &NewQuestion) -> Result<VolunteerQuestion> {
        let input = NewQuestion {
            text: InputValidator::bounded(&input.text, "Question", 500)?,
            position: input.position,
        };
        self.auth.require(actor, Capability::ManageTeams).await?;

        let question = self.storage.db().create_volunteer_question(&input).await?;
        info!(actor = %actor.id, question = %question.id, "volunteer question created");

        self.invalidate(&[paths::ADMIN]);
        Ok(question)
    }

    pub async fn set_volunteer_question_active(
        &self,
        actor: &Actor,
        id: Uuid,
        active: bool,
    ) -> Result<VolunteerQuestion> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        let question = self.storage.db().set_volunteer_question_active(id, active).await?;
        info!(actor = %actor.id, question = %id, active, "volunteer question toggled");

        self.invalidate(&[paths::ADMIN]);
        Ok(question)
    }

    pub async fn delete_volunteer_question(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        self.storage.db().delete_volunteer_question(id).await?;
        info!(actor = %actor.id, question = %id, "volunteer question deleted");

        self.invalidate(&[paths::ADMIN]);
        Ok(())
    }

    /// Apply to a team. Needs an open application period; one application per user.
    pub async fn submit_application(&self, actor: &Actor, form: &ApplicationForm) -> Result<VolunteerApplication> {
        let db = self.storage.db();

        let open = db
            .find_site_setting(VOLUNTEER_APPLICATIONS_OPEN)
            .await?
            .is_some_and(|setting| setting.value == "true");
        if !open {
            return Err(PortalError::conflict("Volunteer applications are closed"));
        }

        // Only answers to active questions are kept, with the question text
        let answers: Vec<ApplicationAnswer> = db
            .list_volunteer_questions(false)
            .await?
            .into_iter()
            .filter_map(|question| {
                let answer = InputValidator::optional(form.answers.get(&question.id).map(String::as_str))?;
                Some(ApplicationAnswer {
                    question: question.text,
                    answer,
                })
            })
            .collect();

        let application = db
            .create_volunteer_application(actor.id, form.team_id, &answers)
            .await?;
        info!(actor = %actor.id, team = %form.team_id, answers = answers.len(), "volunteer application submitted");

        self.invalidate(&[paths::ADMIN, paths::PROFILE]);
        Ok(application)
    }

    pub async fn my_application(&self, actor: &Actor) -> Result<Option<VolunteerApplication>> {
        self.storage.db().find_volunteer_application_of(actor.id).await
    }

    pub async fn list_applications(&self, actor: &Actor) -> Result<Vec<VolunteerApplication>> {
        self.auth.require(actor, Capability::ManageTeams).await?;
        self.storage.db().list_volunteer_applications().await
    }

    pub async fn review_application(
        &self,
        actor: &Actor,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<VolunteerApplication> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        let application = self
            .storage
            .db()
            .update_volunteer_application_status(id, status)
            .await?;
        info!(actor = %actor.id, application = %id, status = status.as_str(), "volunteer application reviewed");

        self.invalidate(&[paths::ADMIN, paths::PROFILE]);
        Ok(application)
    }
}
