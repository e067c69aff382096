// ── Field codec ──
//
// Converts Local Records to controller request bodies and back. Both
// directions are pure; identity (`_id`, `site_id`) is stamped on by the
// resource handlers, not here.

pub mod device;
pub mod port_profile;
pub mod radius;
pub mod vpn;

use serde::Serialize;

use crate::error::CoreError;

/// Bidirectional mapping between a Local Record and its controller object.
///
/// `decode(encode(x))` reproduces `x` for every managed attribute, apart
/// from values the controller normalizes.
pub trait FieldCodec: Sized {
    type Remote: Serialize;

    /// Build the controller request body.
    fn encode(&self) -> Result<Self::Remote, CoreError>;

    /// Rebuild the Local Record. Unmodelled controller fields are ignored.
    fn decode(remote: &Self::Remote) -> Result<Self, CoreError>;
}
