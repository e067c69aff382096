//! Provider configuration for unifi-tf.
//!
//! A flat TOML file plus `UNIFI_*` environment variables, credential
//! resolution (env + keyring + plaintext), and translation to
//! `unifi_tf_core::ProviderConfig`. The binary layers its flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use unifi_tf_core::{DEFAULT_SITE, PlatformHint, ProviderConfig, TlsVerification};

/// Keyring service name; entries are keyed by username.
pub const KEYRING_SERVICE: &str = "unifi-tf";

const ENV_PREFIX: &str = "UNIFI_";
const PASSWORD_ENV: &str = "UNIFI_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("missing {field}: set it in the config file, via {env}, or with --{flag}")]
    Missing {
        field: &'static str,
        env: &'static str,
        flag: &'static str,
    },

    #[error("no password found for user '{username}'")]
    NoCredentials { username: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Controller connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Controller base URL (e.g., "https://192.168.1.1").
    pub api_url: Option<String>,

    pub username: Option<String>,

    /// Plaintext password (prefer the keyring or `UNIFI_PASSWORD`).
    pub password: Option<String>,

    /// Site used when a record doesn't name one.
    #[serde(default = "default_site")]
    pub site: String,

    /// Skip TLS verification (self-signed controllers).
    #[serde(default)]
    pub allow_insecure: bool,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub platform: PlatformHint,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            username: None,
            password: None,
            site: default_site(),
            allow_insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
            platform: PlatformHint::default(),
        }
    }
}

fn default_site() -> String {
    DEFAULT_SITE.into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unifi-tf", "unifi-tf").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("unifi-tf");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from the default path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file is not an error.
///
/// The password is left out of the environment merge so that
/// `resolve_password` controls its precedence.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["password"]));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Credential resolution ───────────────────────────────────────────

/// Password lookup: `UNIFI_PASSWORD`, then the keyring, then the file.
pub fn resolve_password(config: &Config, username: &str) -> Result<SecretString, ConfigError> {
    // 1. Env var
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(pw));
    }

    // 2. Keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, username) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = config.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        username: username.into(),
    })
}

impl Config {
    fn tls(&self) -> TlsVerification {
        if self.allow_insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        }
    }

    /// Build a `ProviderConfig` with an already resolved password.
    pub fn to_provider_config_with(
        &self,
        password: SecretString,
    ) -> Result<ProviderConfig, ConfigError> {
        Ok(ProviderConfig {
            url: self.url()?,
            username: self.username()?.to_owned(),
            password,
            site: self.site.clone(),
            tls: self.tls(),
            timeout: Duration::from_secs(self.timeout),
            platform: self.platform,
        })
    }

    /// Build a `ProviderConfig`, resolving the password from the chain.
    pub fn to_provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        self.url()?;
        let password = resolve_password(self, self.username()?)?;
        self.to_provider_config_with(password)
    }

    fn url(&self) -> Result<url::Url, ConfigError> {
        let raw = self.api_url.as_deref().ok_or(ConfigError::Missing {
            field: "api_url",
            env: "UNIFI_API_URL",
            flag: "api-url",
        })?;
        raw.parse().map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL {raw:?}: {e}"),
        })
    }

    fn username(&self) -> Result<&str, ConfigError> {
        self.username.as_deref().ok_or(ConfigError::Missing {
            field: "username",
            env: "UNIFI_USERNAME",
            flag: "username",
        })
    }
}
