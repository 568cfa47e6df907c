use crate::core::models::{NewReport, Report, Tag};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, report, report_tag, tag};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Tags in name order
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let tags = entities::Tag::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await?;
        Ok(tags.iter().map(tag::Model::to_domain).collect())
    }

    pub async fn create_tag(&self, name: &str) -> Result<Tag> {
        let model = tag::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "A tag with this name already exists"))?;

        Ok(model.to_domain())
    }

    /// Delete a tag and detach it from every report
    pub async fn delete_tag(&self, id: Uuid) -> Result<()> {
        let txn = self.db.begin().await?;

        entities::ReportTag::delete_many()
            .filter(report_tag::Column::TagId.eq(id))
            .exec(&txn)
            .await?;

        let result = entities::Tag::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Tag not found"));
        }

        txn.commit().await?;
        Ok(())
    }

    /// Reports with uploader and tags, newest first
    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        let rows = entities::Report::find()
            .find_also_related(entities::User)
            .order_by_desc(report::Column::UploadedAt)
            .all(&self.db)
            .await?;

        let tags: HashMap<Uuid, Tag> = entities::Tag::find()
            .all(&self.db)
            .await?
            .iter()
            .map(|t| (t.id, t.to_domain()))
            .collect();

        let mut tags_by_report: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for link in entities::ReportTag::find().all(&self.db).await? {
            if let Some(tag) = tags.get(&link.tag_id) {
                tags_by_report
                    .entry(link.report_id)
                    .or_default()
                    .push(tag.clone());
            }
        }

        Ok(rows
            .into_iter()
            .map(|(r, uploader)| {
                let mut tags = tags_by_report.remove(&r.id).unwrap_or_default();
                tags.sort_by(|a, b| a.name.cmp(&b.name));
                r.to_domain(uploader.as_ref(), tags)
            })
            .collect())
    }

    /// Register a report and attach its tags; every tag must exist
    pub async fn create_report(&self, uploaded_by: Uuid, input: &NewReport) -> Result<Report> {
        debug!("Creating report {:?} with {} tags", input.title, input.tag_ids.len());

        let txn = self.db.begin().await?;

        let wanted: BTreeSet<Uuid> = input.tag_ids.iter().copied().collect();
        let tags = if wanted.is_empty() {
            Vec::new()
        } else {
            entities::Tag::find()
                .filter(tag::Column::Id.is_in(wanted.iter().copied()))
                .order_by_asc(tag::Column::Name)
                .all(&txn)
                .await?
        };
        if tags.len() != wanted.len() {
            return Err(PortalError::not_found("Tag not found"));
        }

        let model = report::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            file_url: Set(input.file_url.clone()),
            uploaded_by: Set(Some(uploaded_by)),
            uploaded_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        if !tags.is_empty() {
            let links = tags.iter().map(|t| report_tag::ActiveModel {
                report_id: Set(model.id),
                tag_id: Set(t.id),
            });
            entities::ReportTag::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        let uploader = entities::User::find_by_id(uploaded_by).one(&txn).await?;
        txn.commit().await?;

        Ok(model.to_domain(
            uploader.as_ref(),
            tags.iter().map(tag::Model::to_domain).collect(),
        ))
    }

    pub async fn delete_report(&self, id: Uuid) -> Result<()> {
        let txn = self.db.begin().await?;

        entities::ReportTag::delete_many()
            .filter(report_tag::Column::ReportId.eq(id))
            .exec(&txn)
            .await?;

        let result = entities::Report::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Report not found"));
        }

        txn.commit().await?;
        Ok(())
    }
}
