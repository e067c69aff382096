// Legacy API RADIUS account endpoints (`rest/account`).

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::Account;

impl LegacyClient {
    /// `GET /api/s/{site}/rest/account/{id}`
    pub async fn get_account(&self, site: &str, id: &str) -> Result<Account, Error> {
        let url = self.site_url(site, &format!("rest/account/{id}"))?;
        debug!(site, id, "fetching account");
        let data = self.get(url.clone()).await?;
        Self::expect_one(&url, data)
    }

    /// `POST /api/s/{site}/rest/account`
    pub async fn create_account(&self, site: &str, account: &Account) -> Result<Account, Error> {
        let url = self.site_url(site, "rest/account")?;
        debug!(site, name = %account.name, "creating account");
        let data = self.post(url.clone(), account).await?;
        Self::expect_one(&url, data)
    }

    /// `PUT /api/s/{site}/rest/account/{id}`
    pub async fn update_account(&self, site: &str, account: &Account) -> Result<Account, Error> {
        let url = self.site_url(site, &format!("rest/account/{}", account.id))?;
        debug!(site, id = %account.id, "updating account");
        let data = self.put(url.clone(), account).await?;
        Self::expect_one(&url, data)
    }

    /// `DELETE /api/s/{site}/rest/account/{id}`
    pub async fn delete_account(&self, site: &str, id: &str) -> Result<(), Error> {
        let url = self.site_url(site, &format!("rest/account/{id}"))?;
        debug!(site, id, "deleting account");
        let _: Vec<serde_json::Value> = self.delete(url, None::<&()>).await?;
        Ok(())
    }
}
