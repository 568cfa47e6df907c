use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Question asked on the volunteer application form
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "volunteer_questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub text: String,
    /// Display position, ascending
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> crate::core::models::VolunteerQuestion {
        crate::core::models::VolunteerQuestion {
            id: self.id,
            text: self.text.clone(),
            position: self.position,
            is_active: self.is_active,
        }
    }
}
