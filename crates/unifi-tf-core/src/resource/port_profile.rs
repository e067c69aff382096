use tracing::debug;

use crate::error::CoreError;
use crate::model::port_profile::DEFAULT_PORT_PROFILE;
use crate::model::{PortProfileRecord, Tracked};
use crate::resource::Context;

/// Read-only lookup of switch port profiles by name.
pub struct PortProfiles<'a> {
    ctx: Context<'a>,
}

impl<'a> PortProfiles<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Find a profile by exact name; an empty name means `All`.
    pub async fn find(&self, site: &str, name: &str) -> Result<Tracked<PortProfileRecord>, CoreError> {
        let site = self.ctx.site(site);
        let name = if name.is_empty() {
            DEFAULT_PORT_PROFILE
        } else {
            name
        };

        let profiles = self.ctx.client.list_port_profiles(site).await?;
        debug!(site, count = profiles.len(), name, "searching port profiles");

        profiles
            .iter()
            .find(|p| p.name == name)
            .map(|p| Tracked::new(p.id.clone(), site, PortProfileRecord::from(p)))
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "port profile",
                identifier: name.to_owned(),
            })
    }
}
