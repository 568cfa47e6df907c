use super::m20250101_000001_create_users_table::Users;
use super::m20250101_000003_create_team_tables::Teams;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Tags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reports::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reports::Title).string().not_null())
                    .col(ColumnDef::new(Reports::Description).text().null())
                    .col(ColumnDef::new(Reports::FileUrl).string().not_null())
                    .col(ColumnDef::new(Reports::UploadedBy).uuid().null())
                    .col(
                        ColumnDef::new(Reports::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_uploaded_by")
                            .from(Reports::Table, Reports::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReportTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReportTags::ReportId).uuid().not_null())
                    .col(ColumnDef::new(ReportTags::TagId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(ReportTags::ReportId)
                            .col(ReportTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_tags_report_id")
                            .from(ReportTags::Table, ReportTags::ReportId)
                            .to(Reports::Table, Reports::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_tags_tag_id")
                            .from(ReportTags::Table, ReportTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VolunteerQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VolunteerQuestions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VolunteerQuestions::Text).text().not_null())
                    .col(
                        ColumnDef::new(VolunteerQuestions::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VolunteerQuestions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(VolunteerQuestions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VolunteerApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VolunteerApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VolunteerApplications::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(VolunteerApplications::TeamId).uuid().not_null())
                    .col(ColumnDef::new(VolunteerApplications::Answers).json().not_null())
                    .col(
                        ColumnDef::new(VolunteerApplications::Status)
                            .string_len(16)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(VolunteerApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_applications_user_id")
                            .from(VolunteerApplications::Table, VolunteerApplications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_applications_team_id")
                            .from(VolunteerApplications::Table, VolunteerApplications::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolunteerApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VolunteerQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReportTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    Title,
    Description,
    FileUrl,
    UploadedBy,
    UploadedAt,
}

#[derive(DeriveIden)]
enum ReportTags {
    Table,
    ReportId,
    TagId,
}

#[derive(DeriveIden)]
enum VolunteerQuestions {
    Table,
    Id,
    Text,
    Position,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VolunteerApplications {
    Table,
    Id,
    UserId,
    TeamId,
    Answers,
    Status,
    CreatedAt,
}
