//! create / read / update / delete / import, generic over the resource.

use std::path::Path;

use tracing::{info, warn};

use unifi_tf_core::{Resource, Tracked};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::{input, output};

fn read_state<R: Resource>(file: Option<&Path>) -> Result<Tracked<R::Record>, CliError> {
    let text = input::read_source(file)?;
    input::parse_state(R::NAME, &text)
}

fn require_id<T>(state: &Tracked<T>, operation: &str) -> Result<(), CliError> {
    if state.id.is_empty() {
        return Err(CliError::Input {
            message: format!("{operation} needs the tracked `id` in the record"),
        });
    }
    Ok(())
}

pub async fn create<R: Resource>(
    res: &R,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let state = read_state::<R>(file)?;
    let created = res.create(&state.site, &state.record).await?;
    output::print(format, &created)
}

/// Prints `null` when the object is gone.
pub async fn read<R: Resource>(res: &R, id: &str, format: OutputFormat) -> Result<(), CliError> {
    let state = res.read("", id).await?;
    if state.is_none() {
        info!(kind = R::NAME, id, "object no longer exists");
    }
    output::print(format, &state)
}

pub async fn update<R: Resource>(
    res: &R,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let state = read_state::<R>(file)?;
    require_id(&state, "update")?;
    let updated = res.update(&state).await?;
    if updated.is_none() {
        info!(kind = R::NAME, id = %state.id, "object vanished during update");
    }
    output::print(format, &updated)
}

pub async fn delete<R: Resource>(
    res: &R,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let state = read_state::<R>(file)?;
    require_id(&state, "delete")?;
    let diagnostics = res.delete(&state).await?;
    for diag in &diagnostics {
        warn!(kind = R::NAME, severity = %diag.severity, "{}", diag.summary);
    }
    output::print(format, &diagnostics)
}

/// Import by plain remote id.
pub async fn import<R: Resource>(res: &R, id: &str, format: OutputFormat) -> Result<(), CliError> {
    let state = res.read("", id).await?.ok_or_else(|| CliError::NotFound {
        resource_type: R::NAME.to_owned(),
        identifier: id.to_owned(),
    })?;
    info!(kind = R::NAME, id, "imported");
    output::print(format, &state)
}
