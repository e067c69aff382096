// ── Resource lifecycle ──
//
// One handler per managed object type. Each operation is a single
// encode -> remote call -> decode round trip; nothing is retried and
// nothing is cached between calls.

pub mod device;
pub mod port_profile;
pub mod radius_server;
pub mod radius_user;
pub mod vpn_server;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use unifi_tf_api::LegacyClient;

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::model::{Diagnostic, Tracked};
use crate::validate::Validate;

pub use device::DeviceResource;
pub use port_profile::PortProfiles;
pub use radius_server::RadiusServerResource;
pub use radius_user::RadiusUserResource;
pub use vpn_server::VpnServerResource;

/// Shared state every handler needs: the session and the fallback site.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub client: &'a LegacyClient,
    pub default_site: &'a str,
}

impl<'a> Context<'a> {
    /// `site`, or the configured default when it is empty.
    pub fn site<'s>(&self, site: &'s str) -> &'s str
    where
        'a: 's,
    {
        if site.is_empty() {
            self.default_site
        } else {
            site
        }
    }
}

/// Create/read/update/delete for one declarative resource type.
pub trait Resource {
    /// Resource type name as the orchestrator knows it.
    const NAME: &'static str;

    type Record: FieldCodec + Validate + Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Create (or bind) the remote object and return the tracked state.
    fn create(
        &self,
        site: &str,
        record: &Self::Record,
    ) -> impl Future<Output = Result<Tracked<Self::Record>, CoreError>> + Send;

    /// Fetch current state. `None` means the object is gone and tracking
    /// should be cleared.
    fn read(
        &self,
        site: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Tracked<Self::Record>>, CoreError>> + Send;

    /// Push the declared record. `None` means the object vanished.
    fn update(
        &self,
        state: &Tracked<Self::Record>,
    ) -> impl Future<Output = Result<Option<Tracked<Self::Record>>, CoreError>> + Send;

    /// Remove the object. Non-fatal notes come back as diagnostics.
    fn delete(
        &self,
        state: &Tracked<Self::Record>,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send;
}

/// Map a not-found result to `None`, logging that tracking is cleared.
pub(crate) fn gone_if_missing<T>(
    kind: &str,
    id: &str,
    result: Result<T, unifi_tf_api::Error>,
) -> Result<Option<T>, CoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            info!(kind, id, "remote object is gone, clearing state");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Treat not-found as a completed delete.
pub(crate) fn deleted_if_missing(
    kind: &str,
    id: &str,
    result: Result<(), unifi_tf_api::Error>,
) -> Result<(), CoreError> {
    match result {
        Err(e) if e.is_not_found() => {
            tracing::warn!(kind, id, "already deleted");
            Ok(())
        }
        other => other.map_err(CoreError::from),
    }
}
