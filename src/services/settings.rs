//! Site settings

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::SiteSetting;
use crate::utils::InputValidator;
use crate::utils::error::Result;
use tracing::info;

impl PortalService {
    pub async fn site_settings(&self) -> Result<Vec<SiteSetting>> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::HOME, "settings", || db.list_site_settings())
            .await
    }

    pub async fn update_site_setting(&self, actor: &Actor, key: &str, value: &str) -> Result<SiteSetting> {
        let key = InputValidator::bounded(key, "Key", 100)?;
        self.auth.require(actor, Capability::ManageSettings).await?;

        let setting = self.storage.db().upsert_site_setting(&key, value).await?;
        info!(actor = %actor.id, key = %key, "site setting updated");

        self.invalidate(&[paths::HOME, paths::ADMIN]);
        Ok(setting)
    }
}
