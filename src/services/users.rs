//! Registration, user administration and profiles

use super::{PortalService, paths};
use crate::auth::jwt::TokenResponse;
use crate::auth::{Actor, Capability, Role};
use crate::core::models::{ImageUpdate, LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::storage::database::DatabaseStats;
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;
use uuid::Uuid;

impl PortalService {
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        self.auth.register(request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<(User, TokenResponse)> {
        self.auth.login(request).await
    }

    pub async fn list_users(&self, actor: &Actor) -> Result<Vec<User>> {
        self.auth.require(actor, Capability::ManageUsers).await?;
        self.storage.db().list_users().await
    }

    /// Set a user's role. Takes effect on that user's next request.
    pub async fn change_role(&self, actor: &Actor, user_id: Uuid, role: Role) -> Result<User> {
        self.auth.require(actor, Capability::ManageUsers).await?;

        let user = self.storage.db().update_user_role(user_id, role).await?;
        info!(actor = %actor.id, user = %user_id, %role, "user role changed");

        self.invalidate(&[paths::ADMIN]);
        Ok(user)
    }

    /// Make a user an administrator
    pub async fn promote(&self, actor: &Actor, user_id: Uuid) -> Result<User> {
        self.change_role(actor, user_id, Role::Admin).await
    }

    pub async fn delete_user(&self, actor: &Actor, user_id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageUsers).await?;

        self.storage.db().delete_user(user_id).await?;
        info!(actor = %actor.id, user = %user_id, "user deleted");

        self.invalidate(&[
            paths::HOME,
            paths::ADMIN,
            paths::TEAMS,
            paths::WISHES,
            paths::CALENDAR,
            paths::REPORTS,
        ]);
        Ok(())
    }

    /// Edit profile fields; only the user or an administrator may
    pub async fn update_profile(&self, actor: &Actor, user_id: Uuid, input: &ProfileUpdate) -> Result<User> {
        let input = ProfileUpdate {
            name: InputValidator::bounded(&input.name, "Name", 100)?,
            title: InputValidator::optional(input.title.as_deref()),
            bio: InputValidator::optional(input.bio.as_deref()),
        };
        self.auth.require_owner_or_admin(actor, user_id)?;

        let user = self.storage.db().update_user_profile(user_id, &input).await?;
        info!(actor = %actor.id, user = %user_id, "profile updated");

        // Member and wish listings embed the display name
        self.invalidate(&[paths::PROFILE, paths::TEAMS, paths::WISHES]);
        Ok(user)
    }

    /// Point the avatar at an already hosted image
    pub async fn update_user_image(&self, actor: &Actor, user_id: Uuid, input: &ImageUpdate) -> Result<User> {
        let image_url = InputValidator::link(&input.image_url, "Image")?;
        self.auth.require_owner_or_admin(actor, user_id)?;

        let user = self.storage.db().update_user_image(user_id, &image_url).await?;
        info!(actor = %actor.id, user = %user_id, "profile image updated");

        self.invalidate(&[paths::PROFILE]);
        Ok(user)
    }

    /// Dashboard counters, visible to anyone who can open the admin panel
    pub async fn dashboard_stats(&self, actor: &Actor) -> Result<DatabaseStats> {
        self.auth.require(actor, Capability::ManageReports).await?;
        self.storage.db().stats().await
    }
}
