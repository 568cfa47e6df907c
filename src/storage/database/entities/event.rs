use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub date: DateTimeWithTimeZone,
    pub cover_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> crate::core::models::Event {
        crate::core::models::Event {
            id: self.id,
            title: self.title.clone(),
            location: self.location.clone(),
            date: self.date.to_utc(),
            cover_image: self.cover_image.clone(),
            created_at: self.created_at.to_utc(),
        }
    }
}
