//! Read-only lookups and device import.

use unifi_tf_core::Provider;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

pub async fn import_device(
    provider: &Provider,
    import_id: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let state = provider.devices().import("", import_id).await?;
    output::print(format, &state)
}

pub async fn port_profile(
    provider: &Provider,
    name: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let profile = provider.port_profiles().find("", name).await?;
    output::print(format, &profile)
}

pub async fn device(provider: &Provider, mac: &str, format: OutputFormat) -> Result<(), CliError> {
    let state = provider.devices().lookup("", mac).await?;
    output::print(format, &state)
}
