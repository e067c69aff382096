// ── Runtime connection configuration ──
//
// These types describe *how* to reach a UniFi controller. They carry
// credential data and connection tuning, but never touch disk: the binary
// builds a `ProviderConfig` from `unifi-tf-config` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

/// Site used when neither the record nor the configuration names one.
pub const DEFAULT_SITE: &str = "default";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Which controller flavour to talk to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlatformHint {
    /// Probe the controller's login endpoints.
    #[default]
    Auto,
    /// UniFi OS console (UDM, UCG, Cloud Key Gen2+).
    UnifiOs,
    /// Standalone Network Application.
    Classic,
}

/// Everything needed to open a provider session.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Controller URL (e.g., `https://192.168.1.1`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    /// Site used when a record carries none.
    pub site: String,
    pub tls: TlsVerification,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    pub platform: PlatformHint,
}

impl ProviderConfig {
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            username: username.into(),
            password,
            site: DEFAULT_SITE.to_owned(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            platform: PlatformHint::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_hint_parses_kebab_case() {
        assert_eq!("unifi-os".parse::<PlatformHint>().ok(), Some(PlatformHint::UnifiOs));
        assert_eq!("classic".parse::<PlatformHint>().ok(), Some(PlatformHint::Classic));
        assert_eq!(PlatformHint::Auto.to_string(), "auto");
    }
}
