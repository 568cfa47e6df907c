use crate::core::models::{NewWish, Wish, WishStatus};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, wish};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// All wishes with their author, newest first
    pub async fn list_wishes(&self) -> Result<Vec<Wish>> {
        let rows = entities::Wish::find()
            .find_also_related(entities::User)
            .order_by_desc(wish::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(w, author)| w.to_domain(author.map(|a| a.name)))
            .collect())
    }

    pub async fn create_wish(&self, user_id: Uuid, input: &NewWish) -> Result<Wish> {
        debug!("Creating wish for user {}", user_id);

        let now = chrono::Utc::now();
        let model = wish::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            url: Set(input.url.clone()),
            status: Set(WishStatus::Pending.as_str().to_string()),
            user_id: Set(user_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain(None))
    }

    pub async fn update_wish_status(&self, id: Uuid, status: WishStatus) -> Result<Wish> {
        let mut active_model: wish::ActiveModel = entities::Wish::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| PortalError::not_found("Wish not found"))?
            .into();

        active_model.status = Set(status.as_str().to_string());
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;
        Ok(model.to_domain(None))
    }

    pub async fn delete_wish(&self, id: Uuid) -> Result<()> {
        let result = entities::Wish::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Wish not found"));
        }
        Ok(())
    }

    pub async fn count_wishes_with_status(&self, status: WishStatus) -> Result<u64> {
        Ok(entities::Wish::find()
            .filter(wish::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await?)
    }
}
