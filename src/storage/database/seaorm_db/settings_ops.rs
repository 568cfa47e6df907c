use crate::core::models::SiteSetting;
use crate::utils::error::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use super::super::entities::{self, site_setting};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    pub async fn list_site_settings(&self) -> Result<Vec<SiteSetting>> {
        let settings = entities::SiteSetting::find()
            .order_by_asc(site_setting::Column::Key)
            .all(&self.db)
            .await?;
        Ok(settings.iter().map(site_setting::Model::to_domain).collect())
    }

    pub async fn find_site_setting(&self, key: &str) -> Result<Option<SiteSetting>> {
        let model = entities::SiteSetting::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        Ok(model.as_ref().map(site_setting::Model::to_domain))
    }

    /// Insert or overwrite a setting
    pub async fn upsert_site_setting(&self, key: &str, value: &str) -> Result<SiteSetting> {
        let model = site_setting::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(chrono::Utc::now().into()),
        };

        entities::SiteSetting::insert(model)
            .on_conflict(
                OnConflict::column(site_setting::Column::Key)
                    .update_columns([site_setting::Column::Value, site_setting::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(SiteSetting {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
