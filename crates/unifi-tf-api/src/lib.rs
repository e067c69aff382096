// unifi-tf-api: async client for the UniFi controller legacy REST API
//
// Only the endpoints the provider manages are modelled: devices, port
// profiles, site settings, RADIUS accounts, and network configurations.

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::ControllerPlatform;
pub use error::Error;
pub use legacy::LegacyClient;
pub use transport::{TlsMode, TransportConfig};
