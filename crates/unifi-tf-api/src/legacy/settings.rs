// Legacy API site settings
//
// Settings are singleton documents addressed by key (`radius`, `mgmt`,
// ...). The caller names the key so one pair of helpers serves every
// setting type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;

impl LegacyClient {
    /// Read a setting document.
    ///
    /// `GET /api/s/{site}/get/setting/{key}`
    pub async fn get_setting<T: DeserializeOwned>(&self, site: &str, key: &str) -> Result<T, Error> {
        let url = self.site_url(site, &format!("get/setting/{key}"))?;
        debug!(site, key, "reading setting");
        let data = self.get(url.clone()).await?;
        Self::expect_one(&url, data)
    }

    /// Replace a setting document and return what the controller stored.
    ///
    /// `PUT /api/s/{site}/set/setting/{key}`
    pub async fn set_setting<T>(&self, site: &str, key: &str, setting: &T) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        let url = self.site_url(site, &format!("set/setting/{key}"))?;
        debug!(site, key, "writing setting");
        let data = self.put(url.clone(), setting).await?;
        Self::expect_one(&url, data)
    }
}
