// Remote-user VPN servers are ordinary networks with a fixed purpose.
// The controller stores the subnet as the gateway address (one-based) and
// packs resolvers into four numbered slots.

use std::net::Ipv4Addr;

use tracing::debug;
use unifi_tf_api::legacy::models::Network;

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::model::VpnServerRecord;

pub const VPN_PURPOSE: &str = "remote-user-vpn";

/// Number of DNS slots a network carries.
pub const DNS_SLOTS: usize = 4;

/// Split `a.b.c.d/n` into address and prefix length.
pub fn parse_cidr(cidr: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, prefix) = cidr.split_once('/')?;
    let addr: Ipv4Addr = addr.parse().ok()?;
    let prefix: u8 = prefix.parse().ok()?;
    (prefix <= 32).then_some((addr, prefix))
}

fn network_address(addr: Ipv4Addr, prefix: u8) -> u32 {
    let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    u32::from(addr) & mask
}

fn subnet_error(cidr: &str) -> CoreError {
    CoreError::validation("subnet", format!("{cidr:?} is not an IPv4 CIDR"))
}

/// `10.8.0.0/24` -> `10.8.0.1/24`
pub fn cidr_one_based(cidr: &str) -> Result<String, CoreError> {
    let (addr, prefix) = parse_cidr(cidr).ok_or_else(|| subnet_error(cidr))?;
    let first = Ipv4Addr::from(network_address(addr, prefix).wrapping_add(1));
    Ok(format!("{first}/{prefix}"))
}

/// `10.8.0.1/24` -> `10.8.0.0/24`
pub fn cidr_zero_based(cidr: &str) -> Result<String, CoreError> {
    let (addr, prefix) = parse_cidr(cidr).ok_or_else(|| subnet_error(cidr))?;
    Ok(format!("{}/{prefix}", Ipv4Addr::from(network_address(addr, prefix))))
}

impl FieldCodec for VpnServerRecord {
    type Remote = Network;

    fn encode(&self) -> Result<Network, CoreError> {
        if self.dhcp_dns.len() > DNS_SLOTS {
            return Err(CoreError::validation(
                "dhcp_dns",
                format!("at most {DNS_SLOTS} servers, got {}", self.dhcp_dns.len()),
            ));
        }
        let mut dns = self.dhcp_dns.iter().cloned();
        let mut slot = || dns.next().unwrap_or_default();

        Ok(Network {
            name: self.name.clone(),
            purpose: VPN_PURPOSE.to_owned(),
            enabled: true,
            vpn_type: self.vpn_type.clone(),
            ip_subnet: cidr_one_based(&self.subnet)?,
            dhcpd_start: self.dhcp_start.clone(),
            dhcpd_stop: self.dhcp_stop.clone(),
            dhcpd_dns_enabled: !self.dhcp_dns.is_empty(),
            dhcpd_dns_1: slot(),
            dhcpd_dns_2: slot(),
            dhcpd_dns_3: slot(),
            dhcpd_dns_4: slot(),
            radiusprofile_id: self.radius_profile_id.clone(),
            require_mschapv2: self.require_mschapv2,
            x_ipsec_pre_shared_key: self.pre_shared_key.clone(),
            is_nat: true,
            vlan_enabled: false,
            ipv6_interface_type: "none".to_owned(),
            ..Network::default()
        })
    }

    fn decode(remote: &Network) -> Result<Self, CoreError> {
        let dhcp_dns = if remote.dhcpd_dns_enabled {
            [
                &remote.dhcpd_dns_1,
                &remote.dhcpd_dns_2,
                &remote.dhcpd_dns_3,
                &remote.dhcpd_dns_4,
            ]
            .into_iter()
            .filter(|dns| !dns.is_empty())
            .cloned()
            .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            name: remote.name.clone(),
            vpn_type: remote.vpn_type.clone(),
            subnet: cidr_zero_based(&remote.ip_subnet).unwrap_or_else(|_| {
                debug!(subnet = %remote.ip_subnet, "keeping unparseable remote subnet");
                remote.ip_subnet.clone()
            }),
            dhcp_start: remote.dhcpd_start.clone(),
            dhcp_stop: remote.dhcpd_stop.clone(),
            dhcp_dns,
            radius_profile_id: remote.radiusprofile_id.clone(),
            require_mschapv2: remote.require_mschapv2,
            pre_shared_key: remote.x_ipsec_pre_shared_key.clone(),
        })
    }
}
