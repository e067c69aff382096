use tracing::info;

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::model::{Diagnostic, RadiusUserRecord, Tracked};
use crate::resource::{Context, Resource, deleted_if_missing, gone_if_missing};
use crate::validate::Validate;

/// RADIUS users, stored as controller accounts.
pub struct RadiusUserResource<'a> {
    ctx: Context<'a>,
}

impl<'a> RadiusUserResource<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

impl Resource for RadiusUserResource<'_> {
    const NAME: &'static str = "radius_user";

    type Record = RadiusUserRecord;

    async fn create(
        &self,
        site: &str,
        record: &RadiusUserRecord,
    ) -> Result<Tracked<RadiusUserRecord>, CoreError> {
        record.validate()?;
        let site = self.ctx.site(site);
        let created = self.ctx.client.create_account(site, &record.encode()?).await?;
        info!(site, id = %created.id, "created RADIUS user");
        Ok(Tracked::new(
            created.id.clone(),
            site,
            RadiusUserRecord::decode(&created)?,
        ))
    }

    async fn read(
        &self,
        site: &str,
        id: &str,
    ) -> Result<Option<Tracked<RadiusUserRecord>>, CoreError> {
        let site = self.ctx.site(site);
        let account = gone_if_missing(Self::NAME, id, self.ctx.client.get_account(site, id).await)?;
        account
            .map(|a| Ok(Tracked::new(id, site, RadiusUserRecord::decode(&a)?)))
            .transpose()
    }

    async fn update(
        &self,
        state: &Tracked<RadiusUserRecord>,
    ) -> Result<Option<Tracked<RadiusUserRecord>>, CoreError> {
        state.record.validate()?;
        let site = self.ctx.site(&state.site);
        let mut body = state.record.encode()?;
        body.id.clone_from(&state.id);

        let updated = self.ctx.client.update_account(site, &body).await?;
        Ok(Some(Tracked::new(
            state.id.clone(),
            site,
            RadiusUserRecord::decode(&updated)?,
        )))
    }

    async fn delete(&self, state: &Tracked<RadiusUserRecord>) -> Result<Vec<Diagnostic>, CoreError> {
        let site = self.ctx.site(&state.site);
        deleted_if_missing(
            Self::NAME,
            &state.id,
            self.ctx.client.delete_account(site, &state.id).await,
        )?;
        info!(site, id = %state.id, "deleted RADIUS user");
        Ok(Vec::new())
    }
}
