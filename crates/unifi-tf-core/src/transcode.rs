// ── Value transcoder ──
//
// Scalars whose local text maps onto more than one controller field.
// Transmit power is either a number or a named mode; link speed packs
// auto-negotiation, speed, and duplex into two strings.

use std::fmt;

use crate::error::CoreError;

const TX_POWER_CUSTOM: &str = "custom";

/// Radio transmit power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxPower {
    /// Explicit dBm value, sent with mode `custom` exactly as written.
    Custom(String),
    /// Named mode (`low`, `medium`, `high`, `auto`).
    Mode(String),
}

impl TxPower {
    /// Interpret the local attribute text.
    pub fn parse(text: &str) -> Self {
        if text.parse::<i64>().is_ok() {
            Self::Custom(text.to_owned())
        } else {
            Self::Mode(text.to_owned())
        }
    }

    /// `(tx_power, tx_power_mode)` for the controller.
    pub fn to_remote(&self) -> (String, String) {
        match self {
            Self::Custom(power) => (power.clone(), TX_POWER_CUSTOM.to_owned()),
            Self::Mode(mode) => (String::new(), mode.clone()),
        }
    }

    /// Local text from the controller pair.
    pub fn decode(tx_power: &str, mode: &str) -> String {
        if mode == TX_POWER_CUSTOM {
            tx_power.to_owned()
        } else {
            mode.to_owned()
        }
    }
}

impl fmt::Display for TxPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(text) | Self::Mode(text) => f.write_str(text),
        }
    }
}

/// Controller-side port link fields. `None` means "leave unset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkFields {
    pub autoneg: Option<bool>,
    pub speed: Option<u32>,
    pub full_duplex: Option<bool>,
}

/// Port link speed override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSpeed {
    /// No override.
    Unset,
    /// Auto-negotiate.
    Auto,
    /// Forced speed in Mbps.
    Fixed { speed: u32, full_duplex: bool },
}

impl LinkSpeed {
    /// Interpret the local `link_speed` / `duplex` pair.
    pub fn parse(link_speed: &str, duplex: &str) -> Result<Self, CoreError> {
        match link_speed {
            "" => Ok(Self::Unset),
            "auto" => Ok(Self::Auto),
            other => other
                .parse::<u32>()
                .map(|speed| Self::Fixed {
                    speed,
                    full_duplex: duplex == "full",
                })
                .map_err(|_| CoreError::validation("link_speed", format!("link_speed = {other}"))),
        }
    }

    pub fn from_remote(fields: LinkFields) -> Self {
        if fields.autoneg == Some(true) {
            return Self::Auto;
        }
        match fields.speed {
            Some(speed) if speed != 0 => Self::Fixed {
                speed,
                full_duplex: fields.full_duplex == Some(true),
            },
            _ => Self::Unset,
        }
    }

    pub fn to_remote(self) -> LinkFields {
        match self {
            Self::Unset => LinkFields::default(),
            Self::Auto => LinkFields {
                autoneg: Some(true),
                ..LinkFields::default()
            },
            Self::Fixed { speed, full_duplex } => LinkFields {
                autoneg: None,
                speed: Some(speed),
                full_duplex: Some(full_duplex),
            },
        }
    }

    /// `(link_speed, duplex)` attribute text.
    pub fn to_local(self) -> (String, String) {
        match self {
            Self::Unset => (String::new(), String::new()),
            Self::Auto => ("auto".to_owned(), String::new()),
            Self::Fixed { speed, full_duplex } => (
                speed.to_string(),
                if full_duplex { "full" } else { "half" }.to_owned(),
            ),
        }
    }
}
