//! Wishes, events and projects

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::{
    DEFAULT_PROJECT_STATUS, Event, EventInput, NewProject, NewWish, Project, Wish, WishStatus,
};
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;
use uuid::Uuid;

impl PortalService {
    pub async fn list_wishes(&self) -> Result<Vec<Wish>> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::WISHES, "list", || db.list_wishes())
            .await
    }

    /// Number of granted wishes shown on the home page
    pub async fn completed_wish_count(&self) -> Result<u64> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::HOME, "completed_wishes", || {
                db.count_wishes_with_status(WishStatus::Completed)
            })
            .await
    }

    pub async fn create_wish(&self, actor: &Actor, input: &NewWish) -> Result<Wish> {
        let input = NewWish {
            title: InputValidator::bounded(&input.title, "Title", 200)?,
            description: InputValidator::bounded(&input.description, "Description", 5000)?,
            url: InputValidator::optional(input.url.as_deref()),
        };
        self.auth.require(actor, Capability::ManageWishes).await?;

        let wish = self.storage.db().create_wish(actor.id, &input).await?;
        info!(actor = %actor.id, wish = %wish.id, "wish created");

        self.invalidate(&[paths::HOME, paths::WISHES]);
        Ok(wish)
    }

    pub async fn update_wish_status(&self, actor: &Actor, id: Uuid, status: WishStatus) -> Result<Wish> {
        self.auth.require(actor, Capability::ManageWishes).await?;

        let wish = self.storage.db().update_wish_status(id, status).await?;
        info!(actor = %actor.id, wish = %id, status = status.as_str(), "wish status updated");

        self.invalidate(&[paths::HOME, paths::WISHES, paths::ADMIN]);
        Ok(wish)
    }

    pub async fn delete_wish(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageWishes).await?;

        self.storage.db().delete_wish(id).await?;
        info!(actor = %actor.id, wish = %id, "wish deleted");

        self.invalidate(&[paths::HOME, paths::WISHES, paths::ADMIN]);
        Ok(())
    }

    /// Events in date order
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::EVENTS, "list", || db.list_events())
            .await
    }

    pub async fn event_count(&self) -> Result<u64> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::HOME, "event_count", || db.count_events())
            .await
    }

    fn clean_event(input: &EventInput) -> Result<EventInput> {
        Ok(EventInput {
            title: InputValidator::bounded(&input.title, "Title", 200)?,
            location: InputValidator::bounded(&input.location, "Location", 200)?,
            date: input.date,
            cover_image: InputValidator::optional(input.cover_image.as_deref()),
        })
    }

    pub async fn create_event(&self, actor: &Actor, input: &EventInput) -> Result<Event> {
        let input = Self::clean_event(input)?;
        self.auth.require(actor, Capability::ManageEvents).await?;

        let event = self.storage.db().create_event(&input).await?;
        info!(actor = %actor.id, event = %event.id, "event created");

        self.invalidate(&[paths::HOME, paths::EVENTS, paths::ADMIN]);
        Ok(event)
    }

    pub async fn update_event(&self, actor: &Actor, id: Uuid, input: &EventInput) -> Result<Event> {
        let input = Self::clean_event(input)?;
        self.auth.require(actor, Capability::ManageEvents).await?;

        let event = self.storage.db().update_event(id, &input).await?;
        info!(actor = %actor.id, event = %id, "event updated");

        self.invalidate(&[paths::HOME, paths::EVENTS, paths::ADMIN]);
        Ok(event)
    }

    pub async fn delete_event(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageEvents).await?;

        self.storage.db().delete_event(id).await?;
        info!(actor = %actor.id, event = %id, "event deleted");

        self.invalidate(&[paths::HOME, paths::EVENTS, paths::ADMIN]);
        Ok(())
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::PROJECTS, "list", || db.list_projects())
            .await
    }

    pub async fn create_project(&self, actor: &Actor, input: &NewProject) -> Result<Project> {
        let title = InputValidator::bounded(&input.title, "Title", 200)?;
        let description = InputValidator::bounded(&input.description, "Description", 5000)?;
        let status = InputValidator::optional(input.status.as_deref())
            .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string());
        let image = InputValidator::optional(input.image.as_deref());
        self.auth.require(actor, Capability::ManageProjects).await?;

        let project = self
            .storage
            .db()
            .create_project(&title, &description, &status, image)
            .await?;
        info!(actor = %actor.id, project = %project.id, "project created");

        self.invalidate(&[paths::HOME, paths::PROJECTS, paths::ADMIN]);
        Ok(project)
    }

    pub async fn delete_project(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageProjects).await?;

        self.storage.db().delete_project(id).await?;
        info!(actor = %actor.id, project = %id, "project deleted");

        self.invalidate(&[paths::HOME, paths::PROJECTS, paths::ADMIN]);
        Ok(())
    }
}
