mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use unifi_tf_core::Provider;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr; stdout carries only records.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr);

    if std::env::var_os("UNIFI_LOG_JSON").is_some() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "unifi-tf", &mut std::io::stdout());
            Ok(())
        }

        // Offline: no controller needed
        Command::Validate(ref args) => commands::validate(args, cli.global.output),

        cmd => {
            let provider_config = config::provider_config(&cli.global)?;
            let provider = Provider::connect(provider_config).await?;

            tracing::debug!(command = ?cmd, "dispatching command");
            let result = commands::dispatch(cmd, &provider, &cli.global).await;

            if let Err(e) = provider.disconnect().await {
                tracing::warn!(error = %e, "logout failed");
            }
            result
        }
    }
}
