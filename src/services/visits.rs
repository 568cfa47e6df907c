//! Volunteer visit calendar

use super::{PortalService, paths};
use crate::auth::Actor;
use crate::core::models::{NewVisit, VisitRange, VisitSchedule};
use crate::utils::InputValidator;
use crate::utils::error::{PortalError, Result};
use tracing::info;
use uuid::Uuid;

impl PortalService {
    /// Book a visit for the calling user
    pub async fn create_visit(&self, actor: &Actor, input: &NewVisit) -> Result<VisitSchedule> {
        let input = NewVisit {
            date: input.date,
            experience: InputValidator::bounded(&input.experience, "Experience", 100)?,
            note: InputValidator::optional(input.note.as_deref()),
        };

        let visit = self.storage.db().create_visit(actor.id, &input).await?;
        info!(actor = %actor.id, visit = %visit.id, date = %visit.date, "visit booked");

        self.invalidate(&[paths::CALENDAR]);
        Ok(visit)
    }

    /// Cancel a visit; only its owner or an administrator may
    pub async fn delete_visit(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let visit = self
            .storage
            .db()
            .find_visit(id)
            .await?
            .ok_or_else(|| PortalError::not_found("Visit not found"))?;

        self.auth.require_owner_or_admin(actor, visit.user_id)?;

        self.storage.db().delete_visit(id).await?;
        info!(actor = %actor.id, visit = %id, "visit cancelled");

        self.invalidate(&[paths::CALENDAR]);
        Ok(())
    }

    pub async fn list_visits(&self, range: VisitRange) -> Result<Vec<VisitSchedule>> {
        if range.end < range.start {
            return Err(PortalError::validation("Range end is before its start"));
        }
        self.storage.db().list_visits(range).await
    }
}
