// Legacy API wire types
//
// Models for the controller objects the provider reads and writes. Every
// response is wrapped in the `LegacyResponse<T>` envelope. Fields use
// `#[serde(default)]` liberally because field presence varies across
// firmware versions, and each object keeps an `extra` catch-all so a
// read-modify-write cycle never drops attributes we don't model.

use serde::{Deserialize, Deserializer, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

type Extra = serde_json::Map<String, serde_json::Value>;

/// Accept a JSON string or number and keep it as text.
///
/// Radio channels, HT widths, and STP priorities come back as either
/// depending on firmware.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null => String::new(),
    })
}

// ── Device ───────────────────────────────────────────────────────────

/// Adopted network device (`stat/device`, `rest/device`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_id: String,
    #[serde(default)]
    pub mac: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub device_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(default, skip_serializing)]
    pub adopted: bool,
    /// Never written by the provider; the controller owns this flag.
    #[serde(default, skip_serializing)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub led_override: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mgmt_network_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumboframe_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flowctrl_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stp_version: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub stp_priority: String,
    #[serde(default)]
    pub port_overrides: Vec<DevicePortOverride>,
    #[serde(default)]
    pub ethernet_overrides: Vec<DeviceEthernetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_network: Option<DeviceConfigNetwork>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radio_table: Vec<DeviceRadioTable>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Per-port settings on a switch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevicePortOverride {
    pub port_idx: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub portconf_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub poe_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub op_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoneg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_duplex: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Interface to network-group binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceEthernetOverride {
    #[serde(default)]
    pub ifname: String,
    #[serde(default)]
    pub networkgroup: String,
}

/// Management interface addressing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfigNetwork {
    #[serde(rename = "type", default)]
    pub config_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub netmask: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gateway: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dnssuffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonding_enabled: Option<bool>,
}

/// One radio on an access point. `radio` is `ng` (2.4 GHz) or `na` (5 GHz).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRadioTable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub radio: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub channel: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub ht: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub tx_power: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tx_power_mode: String,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Port profile ─────────────────────────────────────────────────────

/// Switch port profile (`rest/portconf`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub forward: String,
    #[serde(default)]
    pub native_networkconf_id: String,
    #[serde(default)]
    pub poe_mode: String,
    #[serde(default)]
    pub op_mode: String,
    #[serde(default)]
    pub autoneg: Option<bool>,
    #[serde(default)]
    pub speed: Option<u32>,
    #[serde(default)]
    pub full_duplex: Option<bool>,
    #[serde(default)]
    pub stp_port_mode: Option<bool>,
    #[serde(default)]
    pub isolation: Option<bool>,
    #[serde(default)]
    pub stormctrl_bcast_enabled: Option<bool>,
    #[serde(default)]
    pub stormctrl_bcast_level: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Settings ─────────────────────────────────────────────────────────

/// Site-wide RADIUS server setting (`get/setting/radius`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingRadius {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub x_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interim_update_interval: Option<u32>,
    #[serde(default)]
    pub tunneled_reply: bool,
    #[serde(default)]
    pub configure_whole_network: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Account ──────────────────────────────────────────────────────────

/// RADIUS user account (`rest/account`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_type: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_medium_type: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Network ──────────────────────────────────────────────────────────

/// Network configuration (`rest/networkconf`).
///
/// Only the fields the remote-user VPN uses are modelled; DNS slots use
/// the empty string for "unset".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpn_type: String,
    #[serde(default)]
    pub ip_subnet: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dhcpd_start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dhcpd_stop: String,
    #[serde(default)]
    pub dhcpd_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcpd_leasetime: Option<u32>,
    #[serde(default)]
    pub dhcpd_dns_enabled: bool,
    #[serde(default)]
    pub dhcpd_dns_1: String,
    #[serde(default)]
    pub dhcpd_dns_2: String,
    #[serde(default)]
    pub dhcpd_dns_3: String,
    #[serde(default)]
    pub dhcpd_dns_4: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub radiusprofile_id: String,
    #[serde(default)]
    pub require_mschapv2: bool,
    #[serde(default)]
    pub x_ipsec_pre_shared_key: String,
    #[serde(default)]
    pub is_nat: bool,
    #[serde(default)]
    pub vlan_enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6_interface_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}
