use thiserror::Error;

/// Top-level error type for the `unifi-tf-api` crate.
///
/// Covers authentication, transport, the legacy `{meta, data}` envelope,
/// and payload decoding. `unifi-tf-core` maps these into provider-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Legacy API ──────────────────────────────────────────────────
    /// The addressed object does not exist on the controller.
    ///
    /// Raised for HTTP 404, for an `api.err.NotFound` envelope, and for
    /// single-object reads that come back with an empty `data` array.
    #[error("Object not found at {path}")]
    NotFound { path: String },

    /// Error from the legacy API (parsed from the `{meta: {rc, msg}}` envelope).
    #[error("Legacy API error: {message}")]
    LegacyApi { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` when the controller rejected the session or login.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        let err = Error::NotFound {
            path: "/api/s/default/rest/account/abc".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_auth_expired());
        assert!(err.to_string().contains("rest/account/abc"));
    }

    #[test]
    fn legacy_error_is_not_not_found() {
        let err = Error::LegacyApi {
            message: "api.err.InvalidObject".into(),
        };
        assert!(!err.is_not_found());
    }
}
