// The RADIUS server is a singleton settings document per site: create and
// update both overwrite it, and delete switches it off.

use tracing::{info, warn};
use unifi_tf_api::legacy::models::SettingRadius;

use crate::codec::FieldCodec;
use crate::codec::radius::RADIUS_SETTING_KEY;
use crate::error::CoreError;
use crate::model::{Diagnostic, RadiusServerRecord, Tracked};
use crate::resource::{Context, Resource, gone_if_missing};
use crate::validate::Validate;

pub struct RadiusServerResource<'a> {
    ctx: Context<'a>,
}

impl<'a> RadiusServerResource<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    async fn write(
        &self,
        site: &str,
        id: &str,
        record: &RadiusServerRecord,
    ) -> Result<Tracked<RadiusServerRecord>, CoreError> {
        record.validate()?;
        let mut body = record.encode()?;
        id.clone_into(&mut body.id);

        let stored: SettingRadius = self
            .ctx
            .client
            .set_setting(site, RADIUS_SETTING_KEY, &body)
            .await?;
        Ok(Tracked::new(
            stored.id.clone(),
            site,
            RadiusServerRecord::decode(&stored)?,
        ))
    }
}

impl Resource for RadiusServerResource<'_> {
    const NAME: &'static str = "radius_server";

    type Record = RadiusServerRecord;

    async fn create(
        &self,
        site: &str,
        record: &RadiusServerRecord,
    ) -> Result<Tracked<RadiusServerRecord>, CoreError> {
        let site = self.ctx.site(site);
        let state = self.write(site, "", record).await?;
        info!(site, id = %state.id, "configured RADIUS server");
        Ok(state)
    }

    async fn read(
        &self,
        site: &str,
        id: &str,
    ) -> Result<Option<Tracked<RadiusServerRecord>>, CoreError> {
        let site = self.ctx.site(site);
        let setting: Option<SettingRadius> = gone_if_missing(
            Self::NAME,
            id,
            self.ctx.client.get_setting(site, RADIUS_SETTING_KEY).await,
        )?;
        setting
            .map(|s| Ok(Tracked::new(s.id.clone(), site, RadiusServerRecord::decode(&s)?)))
            .transpose()
    }

    async fn update(
        &self,
        state: &Tracked<RadiusServerRecord>,
    ) -> Result<Option<Tracked<RadiusServerRecord>>, CoreError> {
        let site = self.ctx.site(&state.site);
        self.write(site, &state.id, &state.record).await.map(Some)
    }

    async fn delete(
        &self,
        state: &Tracked<RadiusServerRecord>,
    ) -> Result<Vec<Diagnostic>, CoreError> {
        let mut disabled = state.clone();
        disabled.record.enabled = false;
        info!(id = %state.id, "disabling RADIUS server");
        match self.update(&disabled).await {
            Err(e) if e.is_not_found() => {
                warn!(kind = Self::NAME, id = %state.id, "already deleted");
                Ok(Vec::new())
            }
            other => other.map(|_| Vec::new()),
        }
    }
}
