// ── Attribute validation ──
//
// Schema-level checks run before anything is sent to the controller. Each
// failure names the attribute path (`port_override.2.duplex`).

use std::net::Ipv4Addr;

use crate::codec::vpn::{DNS_SLOTS, parse_cidr};
use crate::error::CoreError;
use crate::model::mac::is_mac;
use crate::model::{
    DeviceRecord, PortOverride, RadioBand, RadioConfig, RadiusServerRecord, RadiusUserRecord,
    VpnServerRecord,
};

const LED_OVERRIDES: &[&str] = &["default", "on", "off"];
const STP_VERSIONS: &[&str] = &["stp", "rstp", "disabled"];
const NETWORK_CONFIG_TYPES: &[&str] = &["dhcp", "static"];
const POE_MODES: &[&str] = &["auto", "pasv24", "passthrough", "off"];
const OP_MODES: &[&str] = &["switch", "mirror", "aggregate"];
const DUPLEX_MODES: &[&str] = &["full", "half"];
const LINK_SPEEDS: &[u32] = &[10, 100, 1000, 2500, 5000, 10000];
const CHANNEL_WIDTHS: &[u32] = &[20, 40, 80, 160, 1080, 2160];
const TX_POWER_MODES: &[&str] = &["low", "medium", "high", "auto"];
const TX_POWER_RANGE: std::ops::RangeInclusive<i64> = 6..=26;
const STP_PRIORITY_STEP: u32 = 4096;
const STP_PRIORITY_MAX: u32 = 61440;
const INTERIM_RANGE: std::ops::RangeInclusive<u32> = 60..=86400;
const VPN_TYPES: &[&str] = &["l2tp-server", "pptp-server"];

/// Schema checks for a Local Record.
pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::validation(
            field,
            format!("expected one of {}, got {value:?}", allowed.join(", ")),
        ))
    }
}

/// Like `one_of`, but an empty value means "not set".
fn optional_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if value.is_empty() {
        Ok(())
    } else {
        one_of(field, value, allowed)
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        Err(CoreError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

fn ipv4(field: &str, value: &str) -> Result<(), CoreError> {
    value
        .parse::<Ipv4Addr>()
        .map(|_| ())
        .map_err(|_| CoreError::validation(field, format!("{value:?} is not an IPv4 address")))
}

impl Validate for DeviceRecord {
    fn validate(&self) -> Result<(), CoreError> {
        if !self.mac.is_empty() && !is_mac(&self.mac) {
            return Err(CoreError::validation("mac", "Mac address is invalid"));
        }
        one_of("led_override", &self.led_override, LED_OVERRIDES)?;
        if let Some(version) = &self.stp_version {
            one_of("stp_version", version, STP_VERSIONS)?;
        }
        if let Some(priority) = self.stp_priority {
            if priority % STP_PRIORITY_STEP != 0 || priority > STP_PRIORITY_MAX {
                return Err(CoreError::validation(
                    "stp_priority",
                    format!(
                        "must be a multiple of {STP_PRIORITY_STEP} no greater than {STP_PRIORITY_MAX}, got {priority}"
                    ),
                ));
            }
        }
        if let Some(config) = &self.network_config {
            optional_one_of("network_config.type", &config.config_type, NETWORK_CONFIG_TYPES)?;
        }
        for (i, port) in self.port_override.iter().enumerate() {
            validate_port_override(i, port)?;
        }
        for (i, eth) in self.ethernet_override.iter().enumerate() {
            non_empty(&format!("ethernet_override.{i}.interface"), &eth.interface)?;
            non_empty(&format!("ethernet_override.{i}.network_group"), &eth.network_group)?;
        }
        for (band, radio) in [
            (RadioBand::Ghz2, &self.radio_2g),
            (RadioBand::Ghz5, &self.radio_5g),
        ] {
            if let Some(radio) = radio {
                validate_radio(band.attribute(), radio)?;
            }
        }
        Ok(())
    }
}

fn validate_port_override(i: usize, port: &PortOverride) -> Result<(), CoreError> {
    let field = |name: &str| format!("port_override.{i}.{name}");
    optional_one_of(&field("poe_mode"), &port.poe_mode, POE_MODES)?;
    optional_one_of(&field("op_mode"), &port.op_mode, OP_MODES)?;
    optional_one_of(&field("duplex"), &port.duplex, DUPLEX_MODES)?;
    match port.link_speed.as_str() {
        "" | "auto" => Ok(()),
        other => match other.parse::<u32>() {
            Ok(speed) if LINK_SPEEDS.contains(&speed) => Ok(()),
            _ => Err(CoreError::validation(
                field("link_speed"),
                format!("expected auto or a supported speed in Mbps, got {other:?}"),
            )),
        },
    }
}

fn validate_radio(attribute: &str, radio: &RadioConfig) -> Result<(), CoreError> {
    if let Some(width) = radio.channel_width {
        if !CHANNEL_WIDTHS.contains(&width) {
            return Err(CoreError::validation(
                format!("{attribute}.channel_width"),
                format!("unsupported channel width {width}"),
            ));
        }
    }
    let power = radio.transmit_power.as_str();
    if power.is_empty() || TX_POWER_MODES.contains(&power) {
        return Ok(());
    }
    match power.parse::<i64>() {
        Ok(dbm) if TX_POWER_RANGE.contains(&dbm) => Ok(()),
        _ => Err(CoreError::validation(
            format!("{attribute}.transmit_power"),
            format!("expected low, medium, high, auto, or 6-26, got {power:?}"),
        )),
    }
}

fn port_number(field: &str, value: &str) -> Result<(), CoreError> {
    match value.parse::<u16>() {
        Ok(p) if p != 0 => Ok(()),
        _ => Err(CoreError::validation(
            field,
            format!("{value:?} is not a port number"),
        )),
    }
}

impl Validate for RadiusServerRecord {
    fn validate(&self) -> Result<(), CoreError> {
        non_empty("secret", &self.secret)?;
        port_number("authentication_port", &self.authentication_port)?;
        port_number("accounting_port", &self.accounting_port)?;
        if !INTERIM_RANGE.contains(&self.accounting_interim_interval) {
            return Err(CoreError::validation(
                "accounting_interim_interval",
                format!(
                    "must be between {} and {} seconds",
                    INTERIM_RANGE.start(),
                    INTERIM_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

impl Validate for RadiusUserRecord {
    fn validate(&self) -> Result<(), CoreError> {
        non_empty("username", &self.username)?;
        non_empty("password", &self.password)
    }
}

impl Validate for VpnServerRecord {
    fn validate(&self) -> Result<(), CoreError> {
        non_empty("name", &self.name)?;
        non_empty("radius_profile_id", &self.radius_profile_id)?;
        one_of("vpn_type", &self.vpn_type, VPN_TYPES)?;
        if parse_cidr(&self.subnet).is_none() {
            return Err(CoreError::validation(
                "subnet",
                format!("{:?} is not an IPv4 CIDR", self.subnet),
            ));
        }
        if !self.dhcp_start.is_empty() {
            ipv4("dhcp_start", &self.dhcp_start)?;
        }
        if !self.dhcp_stop.is_empty() {
            ipv4("dhcp_stop", &self.dhcp_stop)?;
        }
        if self.dhcp_dns.len() > DNS_SLOTS {
            return Err(CoreError::validation(
                "dhcp_dns",
                format!("at most {DNS_SLOTS} servers"),
            ));
        }
        for (i, dns) in self.dhcp_dns.iter().enumerate() {
            ipv4(&format!("dhcp_dns.{i}"), dns)?;
        }
        Ok(())
    }
}
