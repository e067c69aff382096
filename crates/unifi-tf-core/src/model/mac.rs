// ── MAC addresses ──
//
// Devices are bound and imported by MAC. The controller reports them in
// lowercase colon form while users write whatever their label says, so
// comparisons go through the cleaned (bare hex) form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Parse a six-octet MAC written with `:` or `-` separators.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if !is_mac(raw) {
            return Err(CoreError::validation(
                "mac",
                format!("{raw:?} is not a MAC address"),
            ));
        }
        Ok(Self(raw.to_lowercase().replace('-', ":")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bare lowercase hex, the form used for matching.
    pub fn cleaned(&self) -> String {
        clean_mac(&self.0)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

/// Lowercase and strip `:` / `-` separators.
pub fn clean_mac(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ':' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Six hex octets separated by `:` or `-` (separators may be mixed).
pub fn is_mac(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            matches!(b, b':' | b'-')
        } else {
            b.is_ascii_hexdigit()
        }
    })
}
