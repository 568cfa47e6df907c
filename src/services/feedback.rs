//! Anonymous feedback widget

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::Feedback;
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;
use uuid::Uuid;

impl PortalService {
    pub async fn submit_feedback(&self, content: &str) -> Result<Feedback> {
        let content = InputValidator::bounded(content, "Feedback", 2000)?;

        let feedback = self.storage.db().create_feedback(&content).await?;
        info!(feedback = %feedback.id, "feedback received");

        self.invalidate(&[paths::ADMIN]);
        Ok(feedback)
    }

    pub async fn list_feedback(&self, actor: &Actor) -> Result<Vec<Feedback>> {
        self.auth.require(actor, Capability::ManageFeedback).await?;
        self.storage.db().list_feedback().await
    }

    pub async fn delete_feedback(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageFeedback).await?;

        self.storage.db().delete_feedback(id).await?;
        info!(actor = %actor.id, feedback = %id, "feedback deleted");

        self.invalidate(&[paths::ADMIN]);
        Ok(())
    }
}
