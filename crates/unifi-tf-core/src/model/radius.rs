// ── RADIUS records ──
//
// The built-in RADIUS server is a per-site setting; its users are
// controller accounts.

use serde::{Deserialize, Serialize};

fn yes() -> bool {
    true
}

fn default_auth_port() -> String {
    "1812".to_owned()
}

fn default_acct_port() -> String {
    "1813".to_owned()
}

fn default_interim_interval() -> u32 {
    3600
}

/// Site RADIUS server settings.
///
/// Ports are text in the schema and integers on the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusServerRecord {
    #[serde(default = "yes")]
    pub enabled: bool,
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_auth_port")]
    pub authentication_port: String,
    #[serde(default = "default_acct_port")]
    pub accounting_port: String,
    #[serde(default = "default_interim_interval")]
    pub accounting_interim_interval: u32,
    #[serde(default = "yes")]
    pub enable_tunneled_reply: bool,
    #[serde(default = "yes")]
    pub configure_whole_network: bool,
}

impl Default for RadiusServerRecord {
    fn default() -> Self {
        Self {
            enabled: true,
            secret: String::new(),
            authentication_port: default_auth_port(),
            accounting_port: default_acct_port(),
            accounting_interim_interval: default_interim_interval(),
            enable_tunneled_reply: true,
            configure_whole_network: true,
        }
    }
}

/// RADIUS user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusUserRecord {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_type: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_medium_type: Option<u32>,
}
