use crate::core::models::{Event, EventInput};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, event};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Events in date order
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let events = entities::Event::find()
            .order_by_asc(event::Column::Date)
            .all(&self.db)
            .await?;
        Ok(events.iter().map(event::Model::to_domain).collect())
    }

    pub async fn count_events(&self) -> Result<u64> {
        Ok(entities::Event::find().count(&self.db).await?)
    }

    pub async fn create_event(&self, input: &EventInput) -> Result<Event> {
        let model = event::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title.clone()),
            location: Set(input.location.clone()),
            date: Set(input.date.into()),
            cover_image: Set(input.cover_image.clone()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain())
    }

    pub async fn update_event(&self, id: Uuid, input: &EventInput) -> Result<Event> {
        let mut active_model: event::ActiveModel = entities::Event::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| PortalError::not_found("Event not found"))?
            .into();

        active_model.title = Set(input.title.clone());
        active_model.location = Set(input.location.clone());
        active_model.date = Set(input.date.into());
        active_model.cover_image = Set(input.cover_image.clone());

        Ok(active_model.update(&self.db).await?.to_domain())
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        let result = entities::Event::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Event not found"));
        }
        Ok(())
    }
}
