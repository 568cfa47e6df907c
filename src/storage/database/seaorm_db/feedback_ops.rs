use crate::core::models::Feedback;
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, feedback};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    pub async fn create_feedback(&self, content: &str) -> Result<Feedback> {
        let model = feedback::ActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(content.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain())
    }

    /// Feedback entries, newest first
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        let entries = entities::Feedback::find()
            .order_by_desc(feedback::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(entries.iter().map(feedback::Model::to_domain).collect())
    }

    pub async fn delete_feedback(&self, id: Uuid) -> Result<()> {
        let result = entities::Feedback::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Feedback not found"));
        }
        Ok(())
    }
}
