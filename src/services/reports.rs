//! Team reports and report tags

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::{NewReport, Report, Tag};
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;
use uuid::Uuid;

impl PortalService {
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::REPORTS, "tags", || db.list_tags())
            .await
    }

    pub async fn create_tag(&self, actor: &Actor, name: &str) -> Result<Tag> {
        let name = InputValidator::bounded(name, "Tag", 50)?;
        self.auth.require(actor, Capability::ManageReports).await?;

        let tag = self.storage.db().create_tag(&name).await?;
        info!(actor = %actor.id, tag = %tag.id, "tag created");

        self.invalidate(&[paths::REPORTS]);
        Ok(tag)
    }

    pub async fn delete_tag(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageReports).await?;

        self.storage.db().delete_tag(id).await?;
        info!(actor = %actor.id, tag = %id, "tag deleted");

        self.invalidate(&[paths::REPORTS]);
        Ok(())
    }

    /// Reports are shared inside the teams: members of any team may read them
    pub async fn list_reports(&self, actor: &Actor) -> Result<Vec<Report>> {
        if !self.storage.db().is_team_member(actor.id).await? {
            self.auth.require(actor, Capability::ManageReports).await?;
        }
        self.storage.db().list_reports().await
    }

    pub async fn create_report(&self, actor: &Actor, input: &NewReport) -> Result<Report> {
        let input = NewReport {
            title: InputValidator::bounded(&input.title, "Title", 200)?,
            description: InputValidator::optional(input.description.as_deref()),
            file_url: InputValidator::link(&input.file_url, "File")?,
            tag_ids: input.tag_ids.clone(),
        };
        self.auth.require(actor, Capability::ManageReports).await?;

        let report = self.storage.db().create_report(actor.id, &input).await?;
        info!(actor = %actor.id, report = %report.id, tags = report.tags.len(), "report created");

        self.invalidate(&[paths::REPORTS, paths::ADMIN]);
        Ok(report)
    }

    pub async fn delete_report(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageReports).await?;

        self.storage.db().delete_report(id).await?;
        info!(actor = %actor.id, report = %id, "report deleted");

        self.invalidate(&[paths::REPORTS, paths::ADMIN]);
        Ok(())
    }
}
