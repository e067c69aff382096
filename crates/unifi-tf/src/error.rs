//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help
//! text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use unifi_tf_config::ConfigError;
use unifi_tf_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(unifi_tf::connection_failed),
        help(
            "{reason}\n\
             Check that the controller is reachable. Self-signed certificates\n\
             need --insecure (-k) or --ca-cert."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(unifi_tf::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(unifi_tf::auth_failed),
        help("Verify the username and password; local controller accounts are required.")
    )]
    AuthFailed { message: String },

    #[error("No password found for user '{username}'")]
    #[diagnostic(
        code(unifi_tf::no_credentials),
        help(
            "Set UNIFI_PASSWORD, store it in the keyring under service 'unifi-tf',\n\
             or pass --ask-password."
        )
    )]
    NoCredentials { username: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} not found: {identifier}")]
    #[diagnostic(code(unifi_tf::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("API error: {message}")]
    #[diagnostic(code(unifi_tf::api_error))]
    Api { message: String },

    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifi_tf::validation))]
    Validation { field: String, reason: String },

    #[error("{message}")]
    #[diagnostic(
        code(unifi_tf::invalid_record),
        help("Check `{field}` in the input record.")
    )]
    InvalidRecord { field: String, message: String },

    #[error("Cannot read record input: {message}")]
    #[diagnostic(
        code(unifi_tf::input),
        help("Pass a JSON or YAML file with --file, or pipe the record on stdin.")
    )]
    Input { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(unifi_tf::no_config))]
    NoConfig { path: String },

    #[error("Missing {field}")]
    #[diagnostic(
        code(unifi_tf::missing_setting),
        help("Set it in the config file, via {env}, or with --{flag}.")
    )]
    MissingSetting {
        field: String,
        env: String,
        flag: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(unifi_tf::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Cannot render output: {message}")]
    #[diagnostic(code(unifi_tf::output))]
    Output { message: String },

    #[error("Internal error: {message}")]
    #[diagnostic(code(unifi_tf::internal))]
    Internal { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::InvalidRecord { .. }
            | Self::Input { .. }
            | Self::MissingSetting { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                resource_type: entity_type.to_owned(),
                identifier,
            },
            CoreError::Validation { field, reason } => CliError::Validation { field, reason },
            CoreError::Block { kind, .. } => {
                let field = match err.root() {
                    CoreError::Validation { field, .. } => field.clone(),
                    _ => kind.to_owned(),
                };
                CliError::InvalidRecord {
                    field,
                    message: err.to_string(),
                }
            }
            CoreError::MalformedRecord { resource, message } => CliError::InvalidRecord {
                field: resource.to_owned(),
                message: format!("malformed {resource} record: {message}"),
            },
            CoreError::Api { message } => CliError::Api { message },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Internal { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Missing { field, env, flag } => CliError::MissingSetting {
                field: field.into(),
                env: env.into(),
                flag: flag.into(),
            },
            ConfigError::NoCredentials { username } => CliError::NoCredentials { username },
            ConfigError::Figment(e) => CliError::Config {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_errors_point_at_the_nested_field() {
        let err = CoreError::Block {
            kind: "port_override",
            source: Box::new(CoreError::Validation {
                field: "port_override.1.duplex".into(),
                reason: "must be half or full".into(),
            }),
        };
        let cli = CliError::from(err);
        assert_eq!(cli.exit_code(), exit_code::USAGE);
        match cli {
            CliError::InvalidRecord { field, message } => {
                assert_eq!(field, "port_override.1.duplex");
                assert!(message.starts_with("unable to process port_override block"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn exit_codes_follow_error_class() {
        let not_found = CliError::from(CoreError::NotFound {
            entity_type: "device",
            identifier: "aabbccddeeff".into(),
        });
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(CliError::from(CoreError::Timeout).exit_code(), exit_code::TIMEOUT);
        assert_eq!(
            CliError::from(CoreError::AuthenticationFailed {
                message: "bad".into()
            })
            .exit_code(),
            exit_code::AUTH
        );
        assert_eq!(
            CliError::from(CoreError::Api {
                message: "api.err.Invalid".into()
            })
            .exit_code(),
            exit_code::GENERAL
        );
    }
}
