//! Record input: JSON or YAML from a file or stdin.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use unifi_tf_core::Tracked;

use crate::error::CliError;

/// Read raw record text. `None` or `-` means stdin.
pub fn read_source(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading record file");
            std::fs::read_to_string(path).map_err(|e| CliError::Input {
                message: format!("{}: {e}", path.display()),
            })
        }
        _ => {
            debug!("reading record from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse record text (YAML is a superset of JSON) into tracked state.
pub fn parse_state<R: DeserializeOwned>(
    resource: &'static str,
    text: &str,
) -> Result<Tracked<R>, CliError> {
    if text.trim().is_empty() {
        return Err(CliError::Input {
            message: "record input is empty".into(),
        });
    }
    let value: serde_json::Value = serde_yaml::from_str(text).map_err(|e| CliError::Input {
        message: e.to_string(),
    })?;
    Ok(Tracked::from_value(resource, value)?)
}

#[cfg(test)]
mod tests {
    use unifi_tf_core::RadiusUserRecord;

    use super::*;

    #[test]
    fn accepts_yaml_and_json() {
        let from_yaml: Tracked<RadiusUserRecord> =
            parse_state("radius_user", "username: alice\npassword: pw\nvlan_id: 20\n")
                .expect("yaml");
        let from_json: Tracked<RadiusUserRecord> = parse_state(
            "radius_user",
            r#"{"username":"alice","password":"pw","vlan_id":20}"#,
        )
        .expect("json");
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml.record.vlan_id, Some(20));
        assert!(from_yaml.id.is_empty());
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_state::<RadiusUserRecord>("radius_user", "  \n").expect_err("empty");
        assert!(matches!(err, CliError::Input { .. }));
    }
}
