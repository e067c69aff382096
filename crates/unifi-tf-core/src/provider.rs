// ── Provider session ──
//
// Owns the authenticated controller client and hands out per-resource
// handlers. One `Provider` serves any number of sequential operations.

use tracing::{debug, info};
use unifi_tf_api::{ControllerPlatform, LegacyClient, TlsMode, TransportConfig};

use crate::config::{PlatformHint, ProviderConfig, TlsVerification};
use crate::error::CoreError;
use crate::resource::{
    Context, DeviceResource, PortProfiles, RadiusServerResource, RadiusUserResource,
    VpnServerResource,
};

pub struct Provider {
    client: LegacyClient,
    config: ProviderConfig,
}

impl Provider {
    /// Resolve the platform, build the client, and log in.
    pub async fn connect(config: ProviderConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);

        let platform = match config.platform {
            PlatformHint::UnifiOs => ControllerPlatform::UnifiOs,
            PlatformHint::Classic => ControllerPlatform::ClassicController,
            PlatformHint::Auto => LegacyClient::detect_platform(&config.url, &transport).await?,
        };
        debug!(?platform, "using controller platform");

        let client = LegacyClient::new(config.url.clone(), platform, &transport)?;
        client.login(&config.username, &config.password).await?;
        info!(url = %config.url, site = %config.site, "connected to controller");

        Ok(Self { client, config })
    }

    /// Wrap an already authenticated client.
    pub fn with_client(client: LegacyClient, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    /// End the controller session.
    pub async fn disconnect(&self) -> Result<(), CoreError> {
        self.client.logout().await?;
        Ok(())
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn ctx(&self) -> Context<'_> {
        Context {
            client: &self.client,
            default_site: &self.config.site,
        }
    }

    pub fn devices(&self) -> DeviceResource<'_> {
        DeviceResource::new(self.ctx())
    }

    pub fn port_profiles(&self) -> PortProfiles<'_> {
        PortProfiles::new(self.ctx())
    }

    pub fn radius_server(&self) -> RadiusServerResource<'_> {
        RadiusServerResource::new(self.ctx())
    }

    pub fn radius_users(&self) -> RadiusUserResource<'_> {
        RadiusUserResource::new(self.ctx())
    }

    pub fn vpn_servers(&self) -> VpnServerResource<'_> {
        VpnServerResource::new(self.ctx())
    }
}

fn build_transport(config: &ProviderConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
        cookie_jar: None, // LegacyClient::new adds one automatically
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
