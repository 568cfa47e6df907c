//! Contact form and contact details

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::{ContactInfo, ContactMessage, DEFAULT_SUBJECT, NewContactMessage};
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;
use uuid::Uuid;

impl PortalService {
    /// Public contact form
    pub async fn submit_contact_message(&self, input: &NewContactMessage) -> Result<ContactMessage> {
        let name = InputValidator::bounded(&input.name, "Name", 100)?;
        let email = InputValidator::email(&input.email)?;
        let subject = InputValidator::optional(input.subject.as_deref())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
        let message = InputValidator::bounded(&input.message, "Message", 5000)?;

        let stored = self
            .storage
            .db()
            .create_contact_message(&name, &email, &subject, &message)
            .await?;
        info!(message = %stored.id, "contact message received");

        self.invalidate(&[paths::ADMIN]);
        Ok(stored)
    }

    pub async fn list_messages(&self, actor: &Actor) -> Result<Vec<ContactMessage>> {
        self.auth.require(actor, Capability::ManageMessages).await?;
        self.storage.db().list_contact_messages().await
    }

    pub async fn toggle_message_read(&self, actor: &Actor, id: Uuid) -> Result<ContactMessage> {
        self.auth.require(actor, Capability::ManageMessages).await?;

        let message = self.storage.db().toggle_message_read(id).await?;
        info!(actor = %actor.id, message = %id, is_read = message.is_read, "message read flag changed");

        self.invalidate(&[paths::ADMIN]);
        Ok(message)
    }

    pub async fn delete_message(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageMessages).await?;

        self.storage.db().delete_contact_message(id).await?;
        info!(actor = %actor.id, message = %id, "message deleted");

        self.invalidate(&[paths::ADMIN]);
        Ok(())
    }

    pub async fn contact_info(&self) -> Result<ContactInfo> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::CONTACT, "info", || db.contact_info())
            .await
    }

    pub async fn update_contact_info(&self, actor: &Actor, input: &ContactInfo) -> Result<ContactInfo> {
        let input = ContactInfo {
            email: InputValidator::email(&input.email)?,
            phone: InputValidator::bounded(&input.phone, "Phone", 50)?,
            address: InputValidator::bounded(&input.address, "Address", 500)?,
        };
        self.auth.require(actor, Capability::ManageMessages).await?;

        let info = self.storage.db().update_contact_info(&input).await?;
        info!(actor = %actor.id, "contact info updated");

        self.invalidate(&[paths::CONTACT, paths::ADMIN]);
        Ok(info)
    }
}
