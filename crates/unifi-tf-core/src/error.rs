// ── Core error types ──
//
// Provider-facing errors. Consumers never see HTTP status codes or JSON
// parse failures directly; the `From<unifi_tf_api::Error>` impl translates
// transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An attribute failed validation. `field` is the attribute path.
    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A repeated or nested block could not be converted.
    #[error("unable to process {kind} block: {source}")]
    Block {
        kind: &'static str,
        #[source]
        source: Box<CoreError>,
    },

    /// Local record input did not match the resource schema.
    #[error("malformed {resource} record: {message}")]
    MalformedRecord {
        resource: &'static str,
        message: String,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for a missing remote object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Strip `Block` wrappers down to the error that caused them.
    pub fn root(&self) -> &CoreError {
        match self {
            Self::Block { source, .. } => source.root(),
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unifi_tf_api::Error> for CoreError {
    fn from(err: unifi_tf_api::Error) -> Self {
        match err {
            unifi_tf_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            unifi_tf_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else if e.status().map(|s| s.as_u16()) == Some(404) {
                    CoreError::NotFound {
                        entity_type: "object",
                        identifier: e.url().map(|u| u.path().to_owned()).unwrap_or_default(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                    }
                }
            }
            unifi_tf_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            unifi_tf_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            unifi_tf_api::Error::NotFound { path } => CoreError::NotFound {
                entity_type: "object",
                identifier: path,
            },
            unifi_tf_api::Error::LegacyApi { message } => CoreError::Api { message },
            unifi_tf_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
