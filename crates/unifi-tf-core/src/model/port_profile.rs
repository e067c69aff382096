use serde::{Deserialize, Serialize};

/// Profile name looked up when none is given.
pub const DEFAULT_PORT_PROFILE: &str = "All";

/// Switch port profile, exposed read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortProfileRecord {
    pub name: String,
    #[serde(default)]
    pub forward: String,
    #[serde(default)]
    pub native_network_id: String,
    #[serde(default)]
    pub poe_mode: String,
    #[serde(default)]
    pub op_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link_speed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duplex: String,
    #[serde(default)]
    pub stp_port_mode: bool,
    #[serde(default)]
    pub isolation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stormctrl_bcast_level: Option<u32>,
}
