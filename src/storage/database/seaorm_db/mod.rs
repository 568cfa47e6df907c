// Module declarations
mod types;
mod connection;
mod user_ops;
mod permission_ops;
mod wish_ops;
mod event_ops;
mod project_ops;
mod team_ops;
mod message_ops;
mod feedback_ops;
mod visit_ops;
mod settings_ops;
mod report_ops;
mod volunteer_ops;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
