use crate::core::models::Project;
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, project};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Projects, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects = entities::Project::find()
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(projects.iter().map(project::Model::to_domain).collect())
    }

    pub async fn create_project(
        &self,
        title: &str,
        description: &str,
        status: &str,
        image: Option<String>,
    ) -> Result<Project> {
        let model = project::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            status: Set(status.to_string()),
            image: Set(image),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain())
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        let result = entities::Project::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Project not found"));
        }
        Ok(())
    }
}
