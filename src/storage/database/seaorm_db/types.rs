use crate::utils::error::PortalError;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Row counts reported by the admin dashboard
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DatabaseStats {
    pub users: u64,
    pub wishes: u64,
    pub completed_wishes: u64,
    pub events: u64,
    pub unread_messages: u64,
}

/// Map a write error, turning unique-key violations into `Conflict`
pub(super) fn write_error(err: DbErr, conflict_message: &str) -> PortalError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => PortalError::conflict(conflict_message),
        _ => PortalError::Database(err),
    }
}
