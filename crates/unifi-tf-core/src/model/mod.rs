// ── Local records ──
//
// Strongly typed declarative shapes, one per resource. Serde is the only
// conversion boundary to the orchestrator; the codec handles the controller
// side.

pub(crate) mod block;
pub mod device;
pub mod mac;
pub mod port_profile;
pub mod radius;
pub mod vpn;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::CoreError;

pub use device::{
    DeviceRecord, EthernetOverride, NetworkConfig, PortOverride, RadioBand, RadioConfig,
};
pub use mac::MacAddress;
pub use port_profile::PortProfileRecord;
pub use radius::{RadiusServerRecord, RadiusUserRecord};
pub use vpn::VpnServerRecord;

/// A record bound to a controller object.
///
/// `id` is assigned once, by a remote create or by binding to an existing
/// object, and every later operation keys off `(site, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracked<R> {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub site: String,
    #[serde(flatten)]
    pub record: R,
}

impl<R> Tracked<R> {
    pub fn new(id: impl Into<String>, site: impl Into<String>, record: R) -> Self {
        Self {
            id: id.into(),
            site: site.into(),
            record,
        }
    }
}

impl<R: DeserializeOwned> Tracked<R> {
    /// Parse orchestrator input for `resource`.
    ///
    /// `id` and `site` may be absent, as they are before a create.
    pub fn from_value(resource: &'static str, value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::MalformedRecord {
            resource,
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// A message for the orchestrator that does not fail the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
}

impl Diagnostic {
    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tracked_flattens_record() {
        let state: Tracked<RadiusUserRecord> = Tracked::from_value(
            "radius_user",
            json!({ "id": "a1", "site": "default", "username": "alice", "password": "pw" }),
        )
        .expect("parses");
        assert_eq!(state.id, "a1");
        assert_eq!(state.record.username, "alice");
    }

    #[test]
    fn diagnostics_serialize_as_warnings() {
        let diag = Diagnostic::warning("device left in place");
        assert_eq!(
            serde_json::to_value(&diag).expect("serializes"),
            json!({ "severity": "warning", "summary": "device left in place" })
        );
        assert_eq!(diag.severity.to_string(), "warning");
    }

    #[test]
    fn malformed_input_names_the_resource() {
        let err = Tracked::<RadiusUserRecord>::from_value("radius_user", json!({ "vlan_id": "x" }))
            .expect_err("bad input");
        assert!(err.to_string().starts_with("malformed radius_user record"), "{err}");
    }
}
