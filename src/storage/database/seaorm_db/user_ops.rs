use crate::auth::access::Role;
use crate::core::models::{ProfileUpdate, User};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(PortalError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email together with the stored password hash
    pub async fn find_user_credentials(&self, email: &str) -> Result<Option<(User, String)>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(PortalError::Database)?;

        Ok(user_model.map(|model| {
            let hash = model.password_hash.clone();
            (model.to_domain_user(), hash)
        }))
    }

    /// Whether an account already uses this email
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Create a new user
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User> {
        debug!("Creating user: {}", email);

        let now = chrono::Utc::now();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.as_str().to_string()),
            title: Set(None),
            bio: Set(None),
            image: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "User already exists"))?;

        Ok(model.to_domain_user())
    }

    /// All users, newest first
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = entities::User::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(users.iter().map(user::Model::to_domain_user).collect())
    }

    async fn load_user(&self, user_id: Uuid) -> Result<user::Model> {
        entities::User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| PortalError::not_found("User not found"))
    }

    /// Change a user's role
    pub async fn update_user_role(&self, user_id: Uuid, role: Role) -> Result<User> {
        debug!("Updating role for user {} to {}", user_id, role);

        let mut active_model: user::ActiveModel = self.load_user(user_id).await?.into();
        active_model.role = Set(role.as_str().to_string());
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;
        Ok(model.to_domain_user())
    }

    /// Update the self-service profile fields
    pub async fn update_user_profile(&self, user_id: Uuid, profile: &ProfileUpdate) -> Result<User> {
        debug!("Updating profile for user: {}", user_id);

        let mut active_model: user::ActiveModel = self.load_user(user_id).await?.into();
        active_model.name = Set(profile.name.clone());
        active_model.title = Set(profile.title.clone());
        active_model.bio = Set(profile.bio.clone());
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;
        Ok(model.to_domain_user())
    }

    /// Point the avatar at a new image
    pub async fn update_user_image(&self, user_id: Uuid, image_url: &str) -> Result<User> {
        debug!("Updating image for user: {}", user_id);

        let mut active_model: user::ActiveModel = self.load_user(user_id).await?.into();
        active_model.image = Set(Some(image_url.to_string()));
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;
        Ok(model.to_domain_user())
    }

    /// Delete a user and everything they own
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        debug!("Deleting user: {}", user_id);

        let txn = self.db.begin().await?;

        entities::TeamMember::delete_many()
            .filter(entities::team_member::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        entities::VisitSchedule::delete_many()
            .filter(entities::visit_schedule::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        entities::Wish::delete_many()
            .filter(entities::wish::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        entities::VolunteerApplication::delete_many()
            .filter(entities::volunteer_application::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        // Reports stay, without an uploader
        entities::Report::update_many()
            .col_expr(
                entities::report::Column::UploadedBy,
                sea_query::Expr::value(Option::<Uuid>::None),
            )
            .filter(entities::report::Column::UploadedBy.eq(user_id))
            .exec(&txn)
            .await?;

        let result = entities::User::delete_by_id(user_id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("User not found"));
        }

        txn.commit().await?;
        Ok(())
    }
}
