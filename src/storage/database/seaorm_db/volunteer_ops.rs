use crate::core::models::{
    ApplicationAnswer, ApplicationStatus, NewQuestion, VolunteerApplication, VolunteerQuestion,
};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, volunteer_application, volunteer_question};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Questions in display order; inactive ones only when `include_inactive`
    pub async fn list_volunteer_questions(&self, include_inactive: bool) -> Result<Vec<VolunteerQuestion>> {
        let mut query = entities::VolunteerQuestion::find();
        if !include_inactive {
            query = query.filter(volunteer_question::Column::IsActive.eq(true));
        }

        let questions = query
            .order_by_asc(volunteer_question::Column::Position)
            .order_by_asc(volunteer_question::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(questions
            .iter()
            .map(volunteer_question::Model::to_domain)
            .collect())
    }

    pub async fn create_volunteer_question(&self, input: &NewQuestion) -> Result<VolunteerQuestion> {
        let model = volunteer_question::ActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(input.text.clone()),
            position: Set(input.position),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain())
    }

    pub async fn set_volunteer_question_active(&self, id: Uuid, active: bool) -> Result<VolunteerQuestion> {
        let mut active_model: volunteer_question::ActiveModel =
            entities::VolunteerQuestion::find_by_id(id)
                .one(&self.db)
                .await?
                .ok_or_else(|| PortalError::not_found("Question not found"))?
                .into();

        active_model.is_active = Set(active);
        let model = active_model.update(&self.db).await?;
        Ok(model.to_domain())
    }

    pub async fn delete_volunteer_question(&self, id: Uuid) -> Result<()> {
        let result = entities::VolunteerQuestion::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Question not found"));
        }
        Ok(())
    }

    /// Store an application; a user who already applied conflicts
    pub async fn create_volunteer_application(
        &self,
        user_id: Uuid,
        team_id: Uuid,
        answers: &[ApplicationAnswer],
    ) -> Result<VolunteerApplication> {
        debug!("Storing volunteer application of user {} for team {}", user_id, team_id);

        let team = entities::Team::find_by_id(team_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| PortalError::not_found("Team not found"))?;

        let model = volunteer_application::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            team_id: Set(team_id),
            answers: Set(serde_json::to_value(answers)?),
            status: Set(ApplicationStatus::Pending.as_str().to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "You have already applied"))?;

        model.to_domain(Some(team.name))
    }

    pub async fn find_volunteer_application_of(&self, user_id: Uuid) -> Result<Option<VolunteerApplication>> {
        let row = entities::VolunteerApplication::find()
            .filter(volunteer_application::Column::UserId.eq(user_id))
            .find_also_related(entities::Team)
            .one(&self.db)
            .await?;

        row.map(|(application, team)| application.to_domain(team.map(|t| t.name)))
            .transpose()
    }

    /// Every application with its team, newest first
    pub async fn list_volunteer_applications(&self) -> Result<Vec<VolunteerApplication>> {
        entities::VolunteerApplication::find()
            .find_also_related(entities::Team)
            .order_by_desc(volunteer_application::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|(application, team)| application.to_domain(team.map(|t| t.name)))
            .collect()
    }

    pub async fn update_volunteer_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<VolunteerApplication> {
        let mut active_model: volunteer_application::ActiveModel =
            entities::VolunteerApplication::find_by_id(id)
                .one(&self.db)
                .await?
                .ok_or_else(|| PortalError::not_found("Application not found"))?
                .into();

        active_model.status = Set(status.as_str().to_string());
        let model = active_model.update(&self.db).await?;
        model.to_domain(None)
    }
}
