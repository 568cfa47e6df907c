//! Core authentication system implementation

use super::access::{AccessControl, Actor, Capability, PermissionSet, Role};
use super::jwt::{JwtHandler, TokenResponse};
use super::password::{hash_password, verify_password};
use crate::config::{AccessConfig, AuthConfig};
use crate::core::models::{LoginRequest, RegisterRequest, User};
use crate::storage::StorageLayer;
use crate::utils::InputValidator;
use crate::utils::error::{PortalError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Main authentication system
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    pub(super) config: Arc<AuthConfig>,
    /// Storage layer for user data
    pub(super) storage: Arc<StorageLayer>,
    /// JWT handler
    pub(super) jwt: Arc<JwtHandler>,
    /// Access gate
    pub(super) access: Arc<AccessControl>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, access: &AccessConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication system");

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt: Arc::new(JwtHandler::new(config)),
            access: Arc::new(AccessControl::new(access)),
        }
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    /// Register a new account with the default role
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let name = InputValidator::bounded(&request.name, "Name", 100)?;
        let email = InputValidator::email(&request.email)?;
        InputValidator::password(&request.password, self.config.password_min_length)?;

        if self.storage.db().email_exists(&email).await? {
            return Err(PortalError::conflict("User already exists"));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .storage
            .db()
            .create_user(&name, &email, &password_hash, Role::default())
            .await?;

        info!("Registered user {} ({})", user.id, user.role);
        Ok(user)
    }

    /// Check credentials and issue a session token
    pub async fn login(&self, request: &LoginRequest) -> Result<(User, TokenResponse)> {
        let email = InputValidator::email(&request.email)
            .map_err(|_| PortalError::unauthenticated("Invalid email or password"))?;

        let Some((user, password_hash)) = self.storage.db().find_user_credentials(&email).await?
        else {
            debug!("Login attempt for unknown email");
            return Err(PortalError::unauthenticated("Invalid email or password"));
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!("Failed login for user {}", user.id);
            return Err(PortalError::unauthenticated("Invalid email or password"));
        }

        let token = self.jwt.issue(user.id)?;
        info!("User {} logged in", user.id);
        Ok((user, token))
    }

    /// Resolve a bearer token to the current user, reading the role from the store
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let claims = self.jwt.verify_token(token)?;
        self.storage
            .db()
            .find_user_by_id(claims.sub)
            .await?
            .ok_or_else(|| PortalError::unauthenticated("Session user no longer exists"))
    }

    /// Permission set of a role, seeding the default when absent and enabled
    pub async fn permissions_for(&self, role: Role) -> Result<Option<PermissionSet>> {
        if let Some(set) = self.storage.db().find_role_permissions(role).await? {
            return Ok(Some(set));
        }

        if !self.access.seeds_defaults() {
            debug!("No permission set stored for {} and seeding disabled", role);
            return Ok(None);
        }

        info!("Seeding default permissions for role {}", role);
        let set = self
            .storage
            .db()
            .seed_role_permissions(role, &PermissionSet::default_for(role))
            .await?;
        Ok(Some(set))
    }

    /// Require `capability` for the actor's current role
    pub async fn require(&self, actor: &Actor, capability: Capability) -> Result<()> {
        let permissions = self.permissions_for(actor.role).await?;
        self.access
            .authorize(actor, capability, permissions.as_ref())
            .into_result()
    }

    /// Require the actor to own the resource or be an administrator
    pub fn require_owner_or_admin(&self, actor: &Actor, owner_id: Uuid) -> Result<()> {
        self.access
            .authorize_owner_or_admin(actor, owner_id)
            .into_result()
    }
}
