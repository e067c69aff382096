//! Builds the provider connection settings: config file and env first,
//! command-line flags on top.

use secrecy::SecretString;

use unifi_tf_config::Config;
use unifi_tf_core::{PlatformHint, ProviderConfig};

use crate::cli::{GlobalOpts, Platform};
use crate::error::CliError;

pub fn provider_config(global: &GlobalOpts) -> Result<ProviderConfig, CliError> {
    let mut cfg = match global.config {
        Some(ref path) => {
            if !path.exists() {
                return Err(CliError::NoConfig {
                    path: path.display().to_string(),
                });
            }
            unifi_tf_config::load_config_from(path)?
        }
        None => unifi_tf_config::load_config()?,
    };
    apply_overrides(&mut cfg, global);

    if global.ask_password {
        let password = rpassword::prompt_password("Controller password: ")?;
        Ok(cfg.to_provider_config_with(SecretString::from(password))?)
    } else {
        Ok(cfg.to_provider_config()?)
    }
}

fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref url) = global.api_url {
        cfg.api_url = Some(url.clone());
    }
    if let Some(ref username) = global.username {
        cfg.username = Some(username.clone());
    }
    if let Some(ref site) = global.site {
        cfg.site.clone_from(site);
    }
    if global.insecure {
        cfg.allow_insecure = true;
    }
    if let Some(ref ca_cert) = global.ca_cert {
        cfg.ca_cert = Some(ca_cert.clone());
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    if let Some(platform) = global.platform {
        cfg.platform = match platform {
            Platform::Auto => PlatformHint::Auto,
            Platform::UnifiOs => PlatformHint::UnifiOs,
            Platform::Classic => PlatformHint::Classic,
        };
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "unifi-tf",
            "--api-url",
            "https://10.0.0.1",
            "--username",
            "ops",
            "--site",
            "branch",
            "--timeout",
            "5",
            "--platform",
            "classic",
            "-k",
            "validate",
            "device",
        ])
        .expect("parses");

        let mut cfg = Config {
            api_url: Some("https://old".into()),
            username: Some("admin".into()),
            ..Config::default()
        };
        apply_overrides(&mut cfg, &cli.global);

        assert_eq!(cfg.api_url.as_deref(), Some("https://10.0.0.1"));
        assert_eq!(cfg.username.as_deref(), Some("ops"));
        assert_eq!(cfg.site, "branch");
        assert_eq!(cfg.timeout, 5);
        assert_eq!(cfg.platform, PlatformHint::Classic);
        assert!(cfg.allow_insecure);
    }
}
