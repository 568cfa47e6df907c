use crate::core::models::{ContactInfo, ContactMessage};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use tracing::info;
use uuid::Uuid;

use super::super::entities::{self, contact_info, contact_message};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    pub async fn create_contact_message(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<ContactMessage> {
        let model = contact_message::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            subject: Set(subject.to_string()),
            message: Set(message.to_string()),
            is_read: Set(false),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.to_domain())
    }

    /// Contact messages, newest first
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let messages = entities::ContactMessage::find()
            .order_by_desc(contact_message::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(messages.iter().map(contact_message::Model::to_domain).collect())
    }

    /// Flip the read flag of a message
    pub async fn toggle_message_read(&self, id: Uuid) -> Result<ContactMessage> {
        let model = entities::ContactMessage::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| PortalError::not_found("Message not found"))?;

        let is_read = model.is_read;
        let mut active_model: contact_message::ActiveModel = model.into();
        active_model.is_read = Set(!is_read);

        Ok(active_model.update(&self.db).await?.to_domain())
    }

    pub async fn delete_contact_message(&self, id: Uuid) -> Result<()> {
        let result = entities::ContactMessage::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Message not found"));
        }
        Ok(())
    }

    /// Current contact details, seeding the defaults on first read
    pub async fn contact_info(&self) -> Result<ContactInfo> {
        if let Some(model) = entities::ContactInfo::find().one(&self.db).await? {
            return Ok(model.to_domain());
        }

        info!("Seeding default contact info");
        let model = Self::contact_info_model(&ContactInfo::default())
            .insert(&self.db)
            .await?;
        Ok(model.to_domain())
    }

    /// Replace the contact details
    pub async fn update_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo> {
        let model = match entities::ContactInfo::find().one(&self.db).await? {
            Some(existing) => {
                let mut active_model: contact_info::ActiveModel = existing.into();
                active_model.email = Set(info.email.clone());
                active_model.phone = Set(info.phone.clone());
                active_model.address = Set(info.address.clone());
                active_model.updated_at = Set(chrono::Utc::now().into());
                active_model.update(&self.db).await?
            }
            None => Self::contact_info_model(info).insert(&self.db).await?,
        };

        Ok(model.to_domain())
    }

    fn contact_info_model(info: &ContactInfo) -> contact_info::ActiveModel {
        contact_info::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(info.email.clone()),
            phone: Set(info.phone.clone()),
            address: Set(info.address.clone()),
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
