// Legacy API network endpoints (`rest/networkconf`).

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::Network;

impl LegacyClient {
    /// `GET /api/s/{site}/rest/networkconf/{id}`
    pub async fn get_network(&self, site: &str, id: &str) -> Result<Network, Error> {
        let url = self.site_url(site, &format!("rest/networkconf/{id}"))?;
        debug!(site, id, "fetching network");
        let data = self.get(url.clone()).await?;
        Self::expect_one(&url, data)
    }

    /// `POST /api/s/{site}/rest/networkconf`
    pub async fn create_network(&self, site: &str, network: &Network) -> Result<Network, Error> {
        let url = self.site_url(site, "rest/networkconf")?;
        debug!(site, name = %network.name, "creating network");
        let data = self.post(url.clone(), network).await?;
        Self::expect_one(&url, data)
    }

    /// `PUT /api/s/{site}/rest/networkconf/{id}`
    pub async fn update_network(&self, site: &str, network: &Network) -> Result<Network, Error> {
        let url = self.site_url(site, &format!("rest/networkconf/{}", network.id))?;
        debug!(site, id = %network.id, "updating network");
        let data = self.put(url.clone(), network).await?;
        Self::expect_one(&url, data)
    }

    /// `DELETE /api/s/{site}/rest/networkconf/{id}`
    ///
    /// The controller wants the network name echoed in the body.
    pub async fn delete_network(&self, site: &str, id: &str, name: &str) -> Result<(), Error> {
        let url = self.site_url(site, &format!("rest/networkconf/{id}"))?;
        debug!(site, id, "deleting network");
        let body = json!({ "name": name });
        let _: Vec<serde_json::Value> = self.delete(url, Some(&body)).await?;
        Ok(())
    }
}
