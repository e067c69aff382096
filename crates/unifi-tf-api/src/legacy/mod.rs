// Legacy (cookie-session) API used by the provider.
//
// Endpoint groups live in their own files as inherent `impl LegacyClient`
// blocks; `models` holds the wire types they exchange.

pub mod accounts;
pub mod auth;
pub mod client;
pub mod devices;
pub mod models;
pub mod networks;
pub mod port_profiles;
pub mod settings;

pub use client::LegacyClient;
