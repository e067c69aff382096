// Devices cannot be created or destroyed through the controller API, only
// adopted ones configured. "Create" binds to an existing device by MAC and
// "delete" just stops tracking it.

use std::future::Future;

use tracing::{debug, info};
use unifi_tf_api::legacy::models::Device;

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::import::{ImportId, ImportTarget};
use crate::model::mac::clean_mac;
use crate::model::{DeviceRecord, Diagnostic, MacAddress, Tracked};
use crate::resource::{Context, Resource, gone_if_missing};
use crate::validate::Validate;

const DELETE_WARNING: &str =
    "Deleting a device is not supported, the device will just be removed from state.";

pub struct DeviceResource<'a> {
    ctx: Context<'a>,
}

impl<'a> DeviceResource<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    async fn find_by_mac(&self, site: &str, cleaned: &str) -> Result<Option<Device>, CoreError> {
        let devices = self.ctx.client.list_devices(site).await?;
        debug!(site, count = devices.len(), "searching devices by MAC");
        Ok(devices.into_iter().find(|d| clean_mac(&d.mac) == cleaned))
    }

    fn track(site: &str, device: &Device) -> Result<Tracked<DeviceRecord>, CoreError> {
        Ok(Tracked::new(&device.id, site, DeviceRecord::decode(device)?))
    }

    /// Read-only lookup of a device by MAC.
    pub async fn lookup(&self, site: &str, mac: &str) -> Result<Tracked<DeviceRecord>, CoreError> {
        let site = self.ctx.site(site);
        let cleaned = MacAddress::parse(mac)?.cleaned();
        let device = self
            .find_by_mac(site, &cleaned)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "device",
                identifier: mac.to_owned(),
            })?;
        Self::track(site, &device)
    }

    /// Resolve an import id and read the device it names.
    ///
    /// `site` is used when the id carries no site prefix.
    pub async fn import(&self, site: &str, raw_id: &str) -> Result<Tracked<DeviceRecord>, CoreError> {
        let parsed = ImportId::parse(raw_id);
        let site = parsed.site_or(self.ctx.site(site)).to_owned();

        let id = match &parsed.target {
            ImportTarget::Id(id) => id.clone(),
            ImportTarget::Mac(cleaned) => self
                .find_by_mac(&site, cleaned)
                .await?
                .map(|d| d.id)
                .ok_or_else(|| CoreError::NotFound {
                    entity_type: "device",
                    identifier: raw_id.to_owned(),
                })?,
        };
        info!(site = %site, id = %id, "importing device");

        self.read(&site, &id).await?.ok_or(CoreError::NotFound {
            entity_type: "device",
            identifier: raw_id.to_owned(),
        })
    }
}

impl Resource for DeviceResource<'_> {
    const NAME: &'static str = "device";

    type Record = DeviceRecord;

    async fn create(
        &self,
        site: &str,
        record: &DeviceRecord,
    ) -> Result<Tracked<DeviceRecord>, CoreError> {
        record.validate()?;
        // encode first: a missing MAC is reported before any remote call
        let body = record.encode()?;
        let site = self.ctx.site(site);

        let found = self
            .find_by_mac(site, &clean_mac(&body.mac))
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "device",
                identifier: format!("mac {}", record.mac),
            })?;
        info!(site, id = %found.id, mac = %found.mac, "bound device");

        let state = Tracked::new(found.id, site, record.clone());
        self.update(&state).await?.ok_or(CoreError::NotFound {
            entity_type: "device",
            identifier: state.id.clone(),
        })
    }

    async fn read(&self, site: &str, id: &str) -> Result<Option<Tracked<DeviceRecord>>, CoreError> {
        let site = self.ctx.site(site);
        let device = gone_if_missing(Self::NAME, id, self.ctx.client.get_device(site, id).await)?;
        device.map(|d| Self::track(site, &d)).transpose()
    }

    async fn update(
        &self,
        state: &Tracked<DeviceRecord>,
    ) -> Result<Option<Tracked<DeviceRecord>>, CoreError> {
        state.record.validate()?;
        let site = self.ctx.site(&state.site);
        let mut body = state.record.encode()?;
        body.id.clone_from(&state.id);

        match self.ctx.client.update_device(site, &body).await {
            Ok(device) => Self::track(site, &device).map(Some),
            Err(e) if e.is_not_found() => {
                debug!(id = %state.id, "device update hit not-found, re-reading");
                self.read(site, &state.id).await
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(
        &self,
        state: &Tracked<DeviceRecord>,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send {
        info!(id = %state.id, "releasing device from state");
        std::future::ready(Ok(vec![Diagnostic::warning(DELETE_WARNING)]))
    }
}
