use crate::core::models::{ApplicationAnswer, ApplicationStatus};
use crate::utils::error::Result as PortalResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Volunteer application; one per user
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "volunteer_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub team_id: Uuid,
    /// JSON array of `{ question, answer }`
    pub answers: Json,
    /// `PENDING`, `APPROVED` or `REJECTED`
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(
        &self,
        team_name: Option<String>,
    ) -> PortalResult<crate::core::models::VolunteerApplication> {
        let answers: Vec<ApplicationAnswer> = serde_json::from_value(self.answers.clone())?;
        Ok(crate::core::models::VolunteerApplication {
            id: self.id,
            user_id: self.user_id,
            team_id: self.team_id,
            team_name,
            answers,
            status: ApplicationStatus::from_db(&self.status),
            created_at: self.created_at.to_utc(),
        })
    }
}
