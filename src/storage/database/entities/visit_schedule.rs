use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Calendar visit booked by a volunteer; one per (user, date)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub experience: String,
    pub note: Option<String>,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self, user_name: Option<String>) -> crate::core::models::VisitSchedule {
        crate::core::models::VisitSchedule {
            id: self.id,
            user_id: self.user_id,
            user_name,
            date: self.date,
            experience: self.experience.clone(),
            note: self.note.clone(),
            created_at: self.created_at.to_utc(),
        }
    }
}
