//! Offline check: validate a record and print the controller payload.

use serde::de::DeserializeOwned;
use tracing::debug;

use unifi_tf_core::resource::{
    DeviceResource, RadiusServerResource, RadiusUserResource, VpnServerResource,
};
use unifi_tf_core::{
    DeviceRecord, FieldCodec, RadiusServerRecord, RadiusUserRecord, Resource, Validate,
    VpnServerRecord,
};

use crate::cli::{OutputFormat, RecordArgs, ResourceKind};
use crate::error::CliError;
use crate::{input, output};

pub fn handle(args: &RecordArgs, format: OutputFormat) -> Result<(), CliError> {
    let text = input::read_source(args.file.as_deref())?;
    match args.kind {
        ResourceKind::Device => check::<DeviceRecord>(DeviceResource::NAME, &text, format),
        ResourceKind::RadiusServer => {
            check::<RadiusServerRecord>(RadiusServerResource::NAME, &text, format)
        }
        ResourceKind::RadiusUser => {
            check::<RadiusUserRecord>(RadiusUserResource::NAME, &text, format)
        }
        ResourceKind::VpnServer => check::<VpnServerRecord>(VpnServerResource::NAME, &text, format),
    }
}

fn check<T>(resource: &'static str, text: &str, format: OutputFormat) -> Result<(), CliError>
where
    T: FieldCodec + Validate + DeserializeOwned,
{
    let state = input::parse_state::<T>(resource, text)?;
    state.record.validate()?;
    let payload = state.record.encode()?;
    debug!(resource, "record is valid");
    output::print(format, &payload)
}
