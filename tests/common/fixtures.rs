//! Test fixtures and data factories
//!
//! All factories create real rows, not mocks.

use super::database::TestDatabase;
use hayat_portal::auth::{Actor, AuthSystem, Role};
use hayat_portal::config::{AccessConfig, AuthConfig, CacheConfig};
use hayat_portal::core::models::User;
use hayat_portal::services::PortalService;
use hayat_portal::storage::{RouteCache, StorageLayer};
use std::sync::Arc;
use uuid::Uuid;

/// Factory for test users
pub struct UserFactory;

impl UserFactory {
    /// Insert a user with the given role and a unique email
    pub async fn insert(db: &TestDatabase, role: Role) -> User {
        let email = format!("user-{}@example.org", &Uuid::new_v4().to_string()[..8]);
        db.db()
            .create_user("Test Gönüllü", &email, "not-a-real-hash", role)
            .await
            .expect("Failed to insert test user")
    }
}

/// Portal services wired over an in-memory database
pub struct TestPortal {
    pub db: TestDatabase,
    pub storage: Arc<StorageLayer>,
    pub auth: Arc<AuthSystem>,
    pub service: PortalService,
}

impl TestPortal {
    /// Default configuration: permission sets are seeded on first access
    pub async fn new() -> Self {
        Self::with_access(AccessConfig::default()).await
    }

    /// Missing permission sets stay missing and deny everything
    pub async fn without_seeding() -> Self {
        Self::with_access(AccessConfig {
            seed_default_permissions: false,
        })
        .await
    }

    pub async fn with_access(access: AccessConfig) -> Self {
        let db = TestDatabase::new().await;
        let storage = Arc::new(StorageLayer::from_parts(
            db.db_arc(),
            RouteCache::new(&CacheConfig::default()),
        ));
        let auth = Arc::new(AuthSystem::new(
            &AuthConfig::default(),
            &access,
            storage.clone(),
        ));
        let service = PortalService::new(auth.clone(), storage.clone());

        Self {
            db,
            storage,
            auth,
            service,
        }
    }

    /// Insert a user and return the gate's view of them
    pub async fn actor(&self, role: Role) -> Actor {
        UserFactory::insert(&self.db, role).await.actor()
    }

    /// Re-read an actor's role from the store, as a new request would
    pub async fn refresh(&self, actor: &Actor) -> Actor {
        self.db
            .db()
            .find_user_by_id(actor.id)
            .await
            .expect("Failed to load user")
            .expect("User disappeared")
            .actor()
    }
}
