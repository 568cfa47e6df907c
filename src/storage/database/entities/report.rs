use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Report document metadata; the document itself lives at `file_url`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    /// Cleared when the uploader's account is deleted
    pub uploaded_by: Option<Uuid>,
    pub uploaded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploadedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::report_tag::Entity")]
    ReportTags,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::report_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(
        &self,
        uploader: Option<&super::user::Model>,
        tags: Vec<crate::core::models::Tag>,
    ) -> crate::core::models::Report {
        crate::core::models::Report {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            file_url: self.file_url.clone(),
            uploaded_by: self.uploaded_by,
            uploader_name: uploader.map(|u| u.name.clone()),
            uploader_image: uploader.and_then(|u| u.image.clone()),
            tags,
            uploaded_at: self.uploaded_at.to_utc(),
        }
    }
}
