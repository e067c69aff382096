use unifi_tf_api::legacy::models::PortProfile;

use crate::model::PortProfileRecord;
use crate::transcode::{LinkFields, LinkSpeed};

impl From<&PortProfile> for PortProfileRecord {
    fn from(p: &PortProfile) -> Self {
        let (link_speed, duplex) = LinkSpeed::from_remote(LinkFields {
            autoneg: p.autoneg,
            speed: p.speed,
            full_duplex: p.full_duplex,
        })
        .to_local();

        Self {
            name: p.name.clone(),
            forward: p.forward.clone(),
            native_network_id: p.native_networkconf_id.clone(),
            poe_mode: p.poe_mode.clone(),
            op_mode: p.op_mode.clone(),
            link_speed,
            duplex,
            stp_port_mode: p.stp_port_mode.unwrap_or(false),
            isolation: p.isolation.unwrap_or(false),
            stormctrl_bcast_level: p
                .stormctrl_bcast_enabled
                .unwrap_or(false)
                .then_some(p.stormctrl_bcast_level)
                .flatten(),
        }
    }
}
