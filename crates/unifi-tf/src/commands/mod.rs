//! Command handlers.
//!
//! Everything except `validate` and `completions` runs against a connected
//! `Provider`; the per-kind handler is picked by `with_resource!`.

mod lifecycle;
mod lookup;
mod validate;

use unifi_tf_core::Provider;

use crate::cli::{Command, GlobalOpts, ResourceKind};
use crate::error::CliError;

pub use validate::handle as validate;

/// Bind the handler for `$kind` to `$res` and evaluate `$body` with it.
macro_rules! with_resource {
    ($provider:expr, $kind:expr, $res:ident => $body:expr) => {
        match $kind {
            ResourceKind::Device => {
                let $res = $provider.devices();
                $body
            }
            ResourceKind::RadiusServer => {
                let $res = $provider.radius_server();
                $body
            }
            ResourceKind::RadiusUser => {
                let $res = $provider.radius_users();
                $body
            }
            ResourceKind::VpnServer => {
                let $res = $provider.vpn_servers();
                $body
            }
        }
    };
}

pub async fn dispatch(
    cmd: Command,
    provider: &Provider,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output;
    match cmd {
        Command::Create(args) => with_resource!(provider, args.kind, res => {
            lifecycle::create(&res, args.file.as_deref(), format).await
        }),
        Command::Read(args) => with_resource!(provider, args.kind, res => {
            lifecycle::read(&res, &args.id, format).await
        }),
        Command::Update(args) => with_resource!(provider, args.kind, res => {
            lifecycle::update(&res, args.file.as_deref(), format).await
        }),
        Command::Delete(args) => with_resource!(provider, args.kind, res => {
            lifecycle::delete(&res, args.file.as_deref(), format).await
        }),
        Command::Import(args) => match args.kind {
            ResourceKind::Device => lookup::import_device(provider, &args.id, format).await,
            kind => with_resource!(provider, kind, res => {
                lifecycle::import(&res, &args.id, format).await
            }),
        },
        Command::PortProfile(args) => lookup::port_profile(provider, &args.name, format).await,
        Command::DeviceLookup(args) => lookup::device(provider, &args.mac, format).await,
        Command::Validate(_) | Command::Completions(_) => Err(CliError::Internal {
            message: "offline command routed to the controller dispatcher".into(),
        }),
    }
}
