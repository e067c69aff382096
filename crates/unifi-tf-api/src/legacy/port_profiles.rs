use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::PortProfile;

impl LegacyClient {
    /// List switch port profiles.
    ///
    /// `GET /api/s/{site}/rest/portconf`
    pub async fn list_port_profiles(&self, site: &str) -> Result<Vec<PortProfile>, Error> {
        let url = self.site_url(site, "rest/portconf")?;
        debug!(site, "listing port profiles");
        self.get(url).await
    }
}
