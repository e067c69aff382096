use serde::{Deserialize, Serialize};

/// Remote-user VPN server, stored by the controller as a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnServerRecord {
    pub name: String,
    pub vpn_type: String,
    /// Zero-based CIDR (`10.8.0.0/24`).
    pub subnet: String,
    #[serde(default)]
    pub dhcp_start: String,
    #[serde(default)]
    pub dhcp_stop: String,
    /// Up to four resolvers handed to clients.
    #[serde(default)]
    pub dhcp_dns: Vec<String>,
    pub radius_profile_id: String,
    #[serde(default)]
    pub require_mschapv2: bool,
    #[serde(default)]
    pub pre_shared_key: String,
}
