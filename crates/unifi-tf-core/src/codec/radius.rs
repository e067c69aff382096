use unifi_tf_api::legacy::models::{Account, SettingRadius};

use crate::codec::FieldCodec;
use crate::error::CoreError;
use crate::model::{RadiusServerRecord, RadiusUserRecord};

/// Settings document that holds the site's RADIUS server.
pub const RADIUS_SETTING_KEY: &str = "radius";

fn port(field: &str, text: &str) -> Result<u16, CoreError> {
    match text.parse::<u16>() {
        Ok(p) if p != 0 => Ok(p),
        _ => Err(CoreError::validation(
            field,
            format!("{text:?} is not a port number"),
        )),
    }
}

impl FieldCodec for RadiusServerRecord {
    type Remote = SettingRadius;

    fn encode(&self) -> Result<SettingRadius, CoreError> {
        Ok(SettingRadius {
            key: RADIUS_SETTING_KEY.to_owned(),
            enabled: self.enabled,
            x_secret: self.secret.clone(),
            auth_port: Some(port("authentication_port", &self.authentication_port)?),
            acct_port: Some(port("accounting_port", &self.accounting_port)?),
            interim_update_interval: Some(self.accounting_interim_interval),
            tunneled_reply: self.enable_tunneled_reply,
            configure_whole_network: self.configure_whole_network,
            ..SettingRadius::default()
        })
    }

    fn decode(remote: &SettingRadius) -> Result<Self, CoreError> {
        Ok(Self {
            enabled: remote.enabled,
            secret: remote.x_secret.clone(),
            authentication_port: remote.auth_port.unwrap_or_default().to_string(),
            accounting_port: remote.acct_port.unwrap_or_default().to_string(),
            accounting_interim_interval: remote.interim_update_interval.unwrap_or_default(),
            enable_tunneled_reply: remote.tunneled_reply,
            configure_whole_network: remote.configure_whole_network,
        })
    }
}

impl FieldCodec for RadiusUserRecord {
    type Remote = Account;

    fn encode(&self) -> Result<Account, CoreError> {
        Ok(Account {
            name: self.username.clone(),
            x_password: self.password.clone(),
            vlan: self.vlan_id,
            tunnel_type: self.tunnel_type,
            tunnel_medium_type: self.tunnel_medium_type,
            ..Account::default()
        })
    }

    fn decode(remote: &Account) -> Result<Self, CoreError> {
        Ok(Self {
            username: remote.name.clone(),
            password: remote.x_password.clone(),
            vlan_id: remote.vlan,
            tunnel_type: remote.tunnel_type,
            tunnel_medium_type: remote.tunnel_medium_type,
        })
    }
}
