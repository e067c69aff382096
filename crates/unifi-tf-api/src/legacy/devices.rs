// Legacy API device endpoints
//
// Reads go through `stat/device` (which carries adoption state), writes
// through `rest/device/{id}`.

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::Device;

impl LegacyClient {
    /// List all devices on a site.
    ///
    /// `GET /api/s/{site}/stat/device`
    pub async fn list_devices(&self, site: &str) -> Result<Vec<Device>, Error> {
        let url = self.site_url(site, "stat/device")?;
        debug!(site, "listing devices");
        self.get(url).await
    }

    /// Fetch one device by id.
    ///
    /// `GET /api/s/{site}/stat/device/{id}`. An empty result is `NotFound`.
    pub async fn get_device(&self, site: &str, id: &str) -> Result<Device, Error> {
        let url = self.site_url(site, &format!("stat/device/{id}"))?;
        debug!(site, id, "fetching device");
        let data = self.get(url.clone()).await?;
        Self::expect_one(&url, data)
    }

    /// Write a device's configuration.
    ///
    /// `PUT /api/s/{site}/rest/device/{id}`
    pub async fn update_device(&self, site: &str, device: &Device) -> Result<Device, Error> {
        let url = self.site_url(site, &format!("rest/device/{}", device.id))?;
        debug!(site, id = %device.id, "updating device");
        let data = self.put(url.clone(), device).await?;
        Self::expect_one(&url, data)
    }
}
