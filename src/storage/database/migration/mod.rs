use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_content_tables;
mod m20250101_000003_create_team_tables;
mod m20250101_000004_create_contact_tables;
mod m20250101_000005_create_calendar_and_settings_tables;
mod m20250101_000006_create_report_and_volunteer_tables;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_content_tables::Migration),
            Box::new(m20250101_000003_create_team_tables::Migration),
            Box::new(m20250101_000004_create_contact_tables::Migration),
            Box::new(m20250101_000005_create_calendar_and_settings_tables::Migration),
            Box::new(m20250101_000006_create_report_and_volunteer_tables::Migration),
        ]
    }
}
