use crate::core::models::{NewVisit, VisitRange, VisitSchedule};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, visit_schedule};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Book a visit; a second booking by the same user on the same date conflicts
    pub async fn create_visit(&self, user_id: Uuid, input: &NewVisit) -> Result<VisitSchedule> {
        let model = visit_schedule::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            date: Set(input.date),
            experience: Set(input.experience.clone()),
            note: Set(input.note.clone()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "A visit is already booked for this date"))?;

        Ok(model.to_domain(None))
    }

    pub async fn find_visit(&self, id: Uuid) -> Result<Option<VisitSchedule>> {
        let model = entities::VisitSchedule::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.to_domain(None)))
    }

    pub async fn delete_visit(&self, id: Uuid) -> Result<()> {
        let result = entities::VisitSchedule::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Visit not found"));
        }
        Ok(())
    }

    /// Visits whose date falls in the inclusive range, in booking order
    pub async fn list_visits(&self, range: VisitRange) -> Result<Vec<VisitSchedule>> {
        let rows = entities::VisitSchedule::find()
            .filter(visit_schedule::Column::Date.between(range.start, range.end))
            .find_also_related(entities::User)
            .order_by_asc(visit_schedule::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(v, user)| v.to_domain(user.map(|u| u.name)))
            .collect())
    }
}
