// unifi-tf-core: declarative field mapping and resource lifecycle for UniFi
//
// Local Records (the flat declarative shape) are converted to controller
// objects by the codec, deduplicated by the collection normalizer, and
// pushed through per-resource lifecycle handlers on a `Provider` session.

pub mod codec;
pub mod collection;
pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod provider;
pub mod resource;
pub mod transcode;
pub mod validate;

pub use codec::FieldCodec;
pub use config::{DEFAULT_SITE, PlatformHint, ProviderConfig, TlsVerification};
pub use error::CoreError;
pub use import::{ImportId, ImportTarget};
pub use model::{
    DeviceRecord, Diagnostic, MacAddress, PortProfileRecord, RadiusServerRecord,
    RadiusUserRecord, Severity, Tracked, VpnServerRecord,
};
pub use provider::Provider;
pub use resource::Resource;
pub use validate::Validate;
