use tracing::info;

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::model::{Diagnostic, Tracked, VpnServerRecord};
use crate::resource::{Context, Resource, deleted_if_missing, gone_if_missing};
use crate::validate::Validate;

/// Remote-user VPN servers, stored as controller networks.
pub struct VpnServerResource<'a> {
    ctx: Context<'a>,
}

impl<'a> VpnServerResource<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

impl Resource for VpnServerResource<'_> {
    const NAME: &'static str = "vpn_server";

    type Record = VpnServerRecord;

    async fn create(
        &self,
        site: &str,
        record: &VpnServerRecord,
    ) -> Result<Tracked<VpnServerRecord>, CoreError> {
        record.validate()?;
        let site = self.ctx.site(site);
        let created = self.ctx.client.create_network(site, &record.encode()?).await?;
        info!(site, id = %created.id, "created VPN server");
        Ok(Tracked::new(
            created.id.clone(),
            site,
            VpnServerRecord::decode(&created)?,
        ))
    }

    async fn read(
        &self,
        site: &str,
        id: &str,
    ) -> Result<Option<Tracked<VpnServerRecord>>, CoreError> {
        let site = self.ctx.site(site);
        let network = gone_if_missing(Self::NAME, id, self.ctx.client.get_network(site, id).await)?;
        network
            .map(|n| Ok(Tracked::new(id, site, VpnServerRecord::decode(&n)?)))
            .transpose()
    }

    async fn update(
        &self,
        state: &Tracked<VpnServerRecord>,
    ) -> Result<Option<Tracked<VpnServerRecord>>, CoreError> {
        state.record.validate()?;
        let site = self.ctx.site(&state.site);
        let mut body = state.record.encode()?;
        body.id.clone_from(&state.id);

        let updated = self.ctx.client.update_network(site, &body).await?;
        Ok(Some(Tracked::new(
            state.id.clone(),
            site,
            VpnServerRecord::decode(&updated)?,
        )))
    }

    async fn delete(&self, state: &Tracked<VpnServerRecord>) -> Result<Vec<Diagnostic>, CoreError> {
        let site = self.ctx.site(&state.site);
        deleted_if_missing(
            Self::NAME,
            &state.id,
            self.ctx
                .client
                .delete_network(site, &state.id, &state.record.name)
                .await,
        )?;
        info!(site, id = %state.id, "deleted VPN server");
        Ok(Vec::new())
    }
}
