// ── Device record ──
//
// Local shape of an adopted switch, gateway, or access point. Attribute
// names are the declarative schema's and are kept verbatim.

use serde::{Deserialize, Deserializer, Serialize};

use crate::collection::{Block, Keyed};
use crate::model::block::{at_most_one, blocks};

/// LED behaviour the controller applies when none is declared.
pub const DEFAULT_LED_OVERRIDE: &str = "default";

fn default_led_override() -> String {
    DEFAULT_LED_OVERRIDE.to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Required to bind a device; read back in controller form.
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub name: String,
    /// Reported by the controller, never written.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default = "default_led_override")]
    pub led_override: String,
    #[serde(default)]
    pub mgmt_network_id: String,
    #[serde(default)]
    pub jumboframe_enabled: bool,
    #[serde(default)]
    pub flowctrl_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stp_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stp_priority: Option<u32>,
    #[serde(default, deserialize_with = "blocks")]
    pub port_override: Vec<PortOverride>,
    #[serde(default, deserialize_with = "blocks")]
    pub ethernet_override: Vec<EthernetOverride>,
    #[serde(
        default,
        deserialize_with = "network_config_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub network_config: Option<NetworkConfig>,
    #[serde(
        default,
        deserialize_with = "radio_2g_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub radio_2g: Option<RadioConfig>,
    #[serde(
        default,
        deserialize_with = "radio_5g_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub radio_5g: Option<RadioConfig>,
}

impl Default for DeviceRecord {
    fn default() -> Self {
        Self {
            mac: String::new(),
            name: String::new(),
            disabled: false,
            led_override: default_led_override(),
            mgmt_network_id: String::new(),
            jumboframe_enabled: false,
            flowctrl_enabled: false,
            stp_version: None,
            stp_priority: None,
            port_override: Vec::new(),
            ethernet_override: Vec::new(),
            network_config: None,
            radio_2g: None,
            radio_5g: None,
        }
    }
}

/// Per-port settings, keyed by port number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortOverride {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub port_profile_id: String,
    #[serde(default)]
    pub poe_mode: String,
    #[serde(default)]
    pub op_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link_speed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duplex: String,
}

impl Block for PortOverride {
    const KIND: &'static str = "port_override";
}

impl Keyed for PortOverride {
    type Key = u32;

    fn key(&self) -> u32 {
        self.number
    }
}

/// Interface to network-group binding, keyed by interface name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetOverride {
    pub interface: String,
    pub network_group: String,
}

impl Block for EthernetOverride {
    const KIND: &'static str = "ethernet_override";
}

impl Keyed for EthernetOverride {
    type Key = String;

    fn key(&self) -> String {
        self.interface.clone()
    }
}

/// Management interface addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(rename = "type", default)]
    pub config_type: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dns1: String,
    #[serde(default)]
    pub dns2: String,
    #[serde(default)]
    pub dns_suffix: String,
    #[serde(default)]
    pub bonding_enabled: bool,
}

impl Block for NetworkConfig {
    const KIND: &'static str = "network_config";
}

/// Access point radio settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioConfig {
    #[serde(default)]
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_width: Option<u32>,
    #[serde(default)]
    pub transmit_power: String,
}

/// Which radio band a `RadioConfig` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioBand {
    Ghz2,
    Ghz5,
}

impl RadioBand {
    /// Attribute name on the device record.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Ghz2 => "radio_2g",
            Self::Ghz5 => "radio_5g",
        }
    }

    /// Controller `radio` code.
    pub fn radio(self) -> &'static str {
        match self {
            Self::Ghz2 => "ng",
            Self::Ghz5 => "na",
        }
    }

    /// Controller interface name.
    pub fn interface(self) -> &'static str {
        match self {
            Self::Ghz2 => "ra0",
            Self::Ghz5 => "rai0",
        }
    }

    pub fn from_radio(radio: &str) -> Option<Self> {
        match radio {
            "ng" => Some(Self::Ghz2),
            "na" => Some(Self::Ghz5),
            _ => None,
        }
    }
}

fn network_config_block<'de, D>(d: D) -> Result<Option<NetworkConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    at_most_one(d, NetworkConfig::KIND)
}

fn radio_2g_block<'de, D>(d: D) -> Result<Option<RadioConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    at_most_one(d, RadioBand::Ghz2.attribute())
}

fn radio_5g_block<'de, D>(d: D) -> Result<Option<RadioConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    at_most_one(d, RadioBand::Ghz5.attribute())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_apply_to_sparse_input() {
        let record: DeviceRecord =
            serde_json::from_value(json!({ "mac": "aa:bb:cc:dd:ee:ff" })).expect("decodes");
        assert_eq!(record.led_override, "default");
        assert!(record.port_override.is_empty());
        assert_eq!(record.network_config, None);
    }

    #[test]
    fn single_blocks_accept_object_or_list() {
        let record: DeviceRecord = serde_json::from_value(json!({
            "network_config": [{ "type": "dhcp" }],
            "radio_2g": { "channel": "6", "transmit_power": "auto" }
        }))
        .expect("decodes");
        assert_eq!(record.network_config.map(|c| c.config_type), Some("dhcp".into()));
        assert_eq!(record.radio_2g.map(|r| r.channel), Some("6".into()));
    }

    #[test]
    fn too_many_single_blocks_are_rejected() {
        let err = serde_json::from_value::<DeviceRecord>(json!({
            "radio_5g": [{ "channel": "36" }, { "channel": "40" }]
        }))
        .expect_err("rejects");
        assert!(err.to_string().contains("unable to process radio_5g block"));
    }

    #[test]
    fn malformed_port_override_names_the_block() {
        let err = serde_json::from_value::<DeviceRecord>(json!({
            "port_override": [{ "number": 1 }, { "name": "no number" }]
        }))
        .expect_err("rejects");
        let msg = err.to_string();
        assert!(msg.contains("unable to process port_override block: item 1"), "{msg}");
    }
}
