use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Label attached to reports
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::report_tag::Entity")]
    ReportTags,
}

impl Related<super::report_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> crate::core::models::Tag {
        crate::core::models::Tag {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
