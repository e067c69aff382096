use tracing::debug;
use unifi_tf_api::legacy::models::{
    Device, DeviceConfigNetwork, DeviceEthernetOverride, DevicePortOverride, DeviceRadioTable,
};

use crate::codec::FieldCodec;
use crate::collection;
use crate::error::CoreError;
use crate::model::device::DEFAULT_LED_OVERRIDE;
use crate::model::{
    DeviceRecord, EthernetOverride, NetworkConfig, PortOverride, RadioBand, RadioConfig,
};
use crate::transcode::{LinkFields, LinkSpeed, TxPower};

const STP_DISABLED: &str = "disabled";

impl FieldCodec for DeviceRecord {
    type Remote = Device;

    fn encode(&self) -> Result<Device, CoreError> {
        if self.mac.is_empty() {
            return Err(CoreError::validation(
                "mac",
                "no MAC address specified, import the device instead",
            ));
        }

        let mut radio_table = Vec::new();
        for (band, radio) in [
            (RadioBand::Ghz2, &self.radio_2g),
            (RadioBand::Ghz5, &self.radio_5g),
        ] {
            if let Some(radio) = radio {
                radio_table.push(encode_radio(radio, band));
            }
        }

        let device = Device {
            mac: self.mac.clone(),
            name: self.name.clone(),
            led_override: self.led_override.clone(),
            mgmt_network_id: self.mgmt_network_id.clone(),
            jumboframe_enabled: Some(self.jumboframe_enabled),
            flowctrl_enabled: Some(self.flowctrl_enabled),
            stp_version: self.stp_version.clone().unwrap_or_default(),
            stp_priority: self
                .stp_priority
                .map(|p| p.to_string())
                .unwrap_or_default(),
            port_overrides: collection::to_remote_list(&self.port_override, encode_port_override)?,
            ethernet_overrides: collection::to_remote_list(&self.ethernet_override, |o| {
                Ok(encode_ethernet_override(o))
            })?,
            config_network: self.network_config.as_ref().map(encode_network_config),
            radio_table,
            ..Device::default()
        };
        debug!(
            mac = %device.mac,
            ports = device.port_overrides.len(),
            "encoded device"
        );
        Ok(device)
    }

    fn decode(remote: &Device) -> Result<Self, CoreError> {
        let mut record = DeviceRecord {
            mac: remote.mac.clone(),
            name: remote.name.clone(),
            disabled: remote.disabled.unwrap_or(false),
            led_override: if remote.led_override.is_empty() {
                DEFAULT_LED_OVERRIDE.to_owned()
            } else {
                remote.led_override.clone()
            },
            mgmt_network_id: remote.mgmt_network_id.clone(),
            jumboframe_enabled: remote.jumboframe_enabled.unwrap_or(false),
            flowctrl_enabled: remote.flowctrl_enabled.unwrap_or(false),
            stp_version: None,
            stp_priority: None,
            port_override: collection::from_remote_list(&remote.port_overrides, |o| {
                Ok(decode_port_override(o))
            })?,
            ethernet_override: collection::from_remote_list(
                &remote.ethernet_overrides,
                |o: &DeviceEthernetOverride| Ok(decode_ethernet_override(o)),
            )?,
            network_config: remote.config_network.as_ref().map(decode_network_config),
            radio_2g: None,
            radio_5g: None,
        };

        if !remote.stp_version.is_empty() {
            record.stp_version = Some(remote.stp_version.clone());
            if remote.stp_version != STP_DISABLED {
                let priority = remote.stp_priority.parse::<u32>().map_err(|e| {
                    CoreError::validation(
                        "stp_priority",
                        format!("{:?} is not a number: {e}", remote.stp_priority),
                    )
                })?;
                record.stp_priority = Some(priority);
            }
        }

        for radio in &remote.radio_table {
            match RadioBand::from_radio(&radio.radio) {
                Some(RadioBand::Ghz2) => record.radio_2g = Some(decode_radio(radio)),
                Some(RadioBand::Ghz5) => record.radio_5g = Some(decode_radio(radio)),
                None => debug!(radio = %radio.radio, "skipping unmanaged radio"),
            }
        }

        Ok(record)
    }
}

fn encode_port_override(local: &PortOverride) -> Result<DevicePortOverride, CoreError> {
    let link = LinkSpeed::parse(&local.link_speed, &local.duplex)?.to_remote();
    Ok(DevicePortOverride {
        port_idx: local.number,
        name: local.name.clone(),
        portconf_id: local.port_profile_id.clone(),
        poe_mode: local.poe_mode.clone(),
        op_mode: local.op_mode.clone(),
        autoneg: link.autoneg,
        speed: link.speed,
        full_duplex: link.full_duplex,
        ..DevicePortOverride::default()
    })
}

fn decode_port_override(remote: &DevicePortOverride) -> PortOverride {
    let (link_speed, duplex) = LinkSpeed::from_remote(LinkFields {
        autoneg: remote.autoneg,
        speed: remote.speed,
        full_duplex: remote.full_duplex,
    })
    .to_local();
    PortOverride {
        number: remote.port_idx,
        name: remote.name.clone(),
        port_profile_id: remote.portconf_id.clone(),
        poe_mode: remote.poe_mode.clone(),
        op_mode: remote.op_mode.clone(),
        link_speed,
        duplex,
    }
}

fn encode_ethernet_override(local: &EthernetOverride) -> DeviceEthernetOverride {
    DeviceEthernetOverride {
        ifname: local.interface.clone(),
        networkgroup: local.network_group.clone(),
    }
}

fn decode_ethernet_override(remote: &DeviceEthernetOverride) -> EthernetOverride {
    EthernetOverride {
        interface: remote.ifname.clone(),
        network_group: remote.networkgroup.clone(),
    }
}

fn encode_network_config(local: &NetworkConfig) -> DeviceConfigNetwork {
    DeviceConfigNetwork {
        config_type: local.config_type.clone(),
        ip: local.ip.clone(),
        netmask: local.netmask.clone(),
        gateway: local.gateway.clone(),
        dns1: local.dns1.clone(),
        dns2: local.dns2.clone(),
        dnssuffix: local.dns_suffix.clone(),
        bonding_enabled: Some(local.bonding_enabled),
    }
}

fn decode_network_config(remote: &DeviceConfigNetwork) -> NetworkConfig {
    NetworkConfig {
        config_type: remote.config_type.clone(),
        ip: remote.ip.clone(),
        netmask: remote.netmask.clone(),
        gateway: remote.gateway.clone(),
        dns1: remote.dns1.clone(),
        dns2: remote.dns2.clone(),
        dns_suffix: remote.dnssuffix.clone(),
        bonding_enabled: remote.bonding_enabled.unwrap_or(false),
    }
}

fn encode_radio(local: &RadioConfig, band: RadioBand) -> DeviceRadioTable {
    let (tx_power, tx_power_mode) = TxPower::parse(&local.transmit_power).to_remote();
    DeviceRadioTable {
        name: band.interface().to_owned(),
        radio: band.radio().to_owned(),
        channel: local.channel.clone(),
        ht: local.channel_width.map(|w| w.to_string()).unwrap_or_default(),
        tx_power,
        tx_power_mode,
        ..DeviceRadioTable::default()
    }
}

fn decode_radio(remote: &DeviceRadioTable) -> RadioConfig {
    RadioConfig {
        channel: remote.channel.clone(),
        channel_width: remote.ht.parse().ok(),
        transmit_power: TxPower::decode(&remote.tx_power, &remote.tx_power_mode),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> DeviceRecord {
        DeviceRecord {
            mac: "aa:bb:cc:dd:ee:ff".into(),
            name: "core-switch".into(),
            led_override: "off".into(),
            mgmt_network_id: "net1".into(),
            jumboframe_enabled: true,
            flowctrl_enabled: false,
            stp_version: Some("rstp".into()),
            stp_priority: Some(4096),
            port_override: vec![
                PortOverride {
                    number: 1,
                    name: "uplink".into(),
                    port_profile_id: "pp1".into(),
                    link_speed: "auto".into(),
                    ..PortOverride::default()
                },
                PortOverride {
                    number: 2,
                    name: "camera".into(),
                    poe_mode: "auto".into(),
                    op_mode: "switch".into(),
                    link_speed: "100".into(),
                    duplex: "full".into(),
                    ..PortOverride::default()
                },
            ],
            ethernet_override: vec![EthernetOverride {
                interface: "eth0".into(),
                network_group: "LAN".into(),
            }],
            network_config: Some(NetworkConfig {
                config_type: "static".into(),
                ip: "10.0.0.2".into(),
                netmask: "255.255.255.0".into(),
                gateway: "10.0.0.1".into(),
                dns1: "1.1.1.1".into(),
                dns2: String::new(),
                dns_suffix: "lan".into(),
                bonding_enabled: false,
            }),
            radio_2g: Some(RadioConfig {
                channel: "6".into(),
                channel_width: Some(20),
                transmit_power: "15".into(),
            }),
            radio_5g: Some(RadioConfig {
                channel: "auto".into(),
                channel_width: Some(80),
                transmit_power: "high".into(),
            }),
            ..DeviceRecord::default()
        }
    }

    #[test]
    fn round_trips_managed_fields() {
        let record = sample();
        let remote = record.encode().expect("encodes");
        let decoded = DeviceRecord::decode(&remote).expect("decodes");
        assert_eq!(decoded, record);
    }

    #[test]
    fn radios_map_to_band_codes() {
        let remote = sample().encode().expect("encodes");
        let ng = &remote.radio_table[0];
        assert_eq!((ng.radio.as_str(), ng.name.as_str()), ("ng", "ra0"));
        assert_eq!((ng.tx_power.as_str(), ng.tx_power_mode.as_str()), ("15", "custom"));
        assert_eq!(ng.ht, "20");
        let na = &remote.radio_table[1];
        assert_eq!((na.radio.as_str(), na.name.as_str()), ("na", "rai0"));
        assert_eq!((na.tx_power.as_str(), na.tx_power_mode.as_str()), ("", "high"));
    }

    #[test]
    fn duplicate_port_numbers_collapse_to_last() {
        let mut record = sample();
        record.port_override.push(PortOverride {
            number: 1,
            name: "renamed".into(),
            ..PortOverride::default()
        });
        let remote = record.encode().expect("encodes");
        let ports: Vec<(u32, &str)> = remote
            .port_overrides
            .iter()
            .map(|p| (p.port_idx, p.name.as_str()))
            .collect();
        assert_eq!(ports, vec![(1, "renamed"), (2, "camera")]);
    }

    #[test]
    fn duplicate_ethernet_interfaces_collapse_to_last() {
        let mut record = sample();
        record.ethernet_override.push(EthernetOverride {
            interface: "eth0".into(),
            network_group: "WAN".into(),
        });
        let remote = record.encode().expect("encodes");
        assert_eq!(remote.ethernet_overrides.len(), 1);
        assert_eq!(remote.ethernet_overrides[0].ifname, "eth0");
        assert_eq!(remote.ethernet_overrides[0].networkgroup, "WAN");

        let decoded = DeviceRecord::decode(&remote).expect("decodes");
        assert_eq!(
            decoded.ethernet_override,
            vec![EthernetOverride {
                interface: "eth0".into(),
                network_group: "WAN".into(),
            }]
        );
    }

    #[test]
    fn missing_led_override_reads_as_default() {
        let remote: Device =
            serde_json::from_value(json!({ "mac": "aa:bb:cc:dd:ee:ff" })).expect("remote decodes");
        let record = DeviceRecord::decode(&remote).expect("decodes");
        assert_eq!(record.led_override, DEFAULT_LED_OVERRIDE);
    }

    #[test]
    fn missing_mac_is_a_validation_error() {
        let err = DeviceRecord::default().encode().expect_err("rejects");
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "mac"));
    }

    #[test]
    fn bad_link_speed_names_port_override_block() {
        let mut record = sample();
        record.port_override[0].link_speed = "gigabit".into();
        let err = record.encode().expect_err("rejects");
        assert!(err
            .to_string()
            .starts_with("unable to process port_override block"));
    }

    #[test]
    fn disabled_is_read_but_never_written() {
        let mut record = sample();
        record.disabled = true;
        let body = serde_json::to_value(record.encode().expect("encodes")).expect("serializes");
        assert!(body.get("disabled").is_none());

        let remote: Device = serde_json::from_value(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "disabled": true
        }))
        .expect("remote decodes");
        assert!(DeviceRecord::decode(&remote).expect("decodes").disabled);
    }

    #[test]
    fn stp_priority_is_skipped_when_stp_disabled() {
        let remote: Device = serde_json::from_value(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "stp_version": "disabled",
            "stp_priority": "garbage"
        }))
        .expect("remote decodes");
        let record = DeviceRecord::decode(&remote).expect("decodes");
        assert_eq!(record.stp_version.as_deref(), Some("disabled"));
        assert_eq!(record.stp_priority, None);
    }

    #[test]
    fn unparseable_stp_priority_names_the_field() {
        let remote: Device = serde_json::from_value(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "stp_version": "rstp",
            "stp_priority": "high"
        }))
        .expect("remote decodes");
        let err = DeviceRecord::decode(&remote).expect_err("rejects");
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "stp_priority"));
    }

    #[test]
    fn absent_network_config_stays_absent() {
        let remote: Device =
            serde_json::from_value(json!({ "mac": "aa:bb:cc:dd:ee:ff" })).expect("remote decodes");
        let record = DeviceRecord::decode(&remote).expect("decodes");
        assert_eq!(record.network_config, None);
        assert!(record.radio_2g.is_none());
    }
}
