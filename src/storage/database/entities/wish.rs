use crate::core::models::WishStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wish board entry
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    /// `PENDING`, `IN_PROCESS` or `COMPLETED`
    pub status: String,
    /// Creator
    pub user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
    pub fn to_domain(&self, author_name: Option<String>) -> crate::core::models::Wish {
        crate::core::models::Wish {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            status: WishStatus::from_db(&self.status),
            user_id: self.user_id,
            author_name,
            created_at: self.created_at.to_utc(),
        }
    }
}
