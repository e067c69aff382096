//! Clap derive structures for the `unifi-tf` binary.
//!
//! Shared with `build.rs` for man page generation, so this file may only
//! depend on clap and clap_complete.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifi-tf -- declarative management of UniFi controller objects
#[derive(Debug, Parser)]
#[command(
    name = "unifi-tf",
    version,
    about = "Declaratively manage UniFi devices, RADIUS and VPN servers",
    long_about = "Applies declarative records to a UniFi Network controller.\n\n\
        Records are read as JSON or YAML from a file or stdin, pushed through\n\
        the controller's legacy REST API, and the resulting state is printed\n\
        back in the same shape. Progress and warnings go to stderr.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "UNIFI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Controller URL
    #[arg(long, short = 'u', env = "UNIFI_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Controller username
    #[arg(long, env = "UNIFI_USERNAME", global = true)]
    pub username: Option<String>,

    /// Prompt for the password instead of using env, keyring or config
    #[arg(long, global = true)]
    pub ask_password: bool,

    /// Site used when a record names none
    #[arg(long, short = 's', env = "UNIFI_SITE", global = true)]
    pub site: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "UNIFI_INSECURE", global = true)]
    pub insecure: bool,

    /// Custom CA certificate (PEM)
    #[arg(long, global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "UNIFI_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Controller flavour
    #[arg(long, env = "UNIFI_PLATFORM", global = true)]
    pub platform: Option<Platform>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Shared Enums ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Platform {
    /// Probe the controller
    Auto,
    /// UniFi OS console (UDM, UCG, Cloud Key Gen2+)
    UnifiOs,
    /// Standalone Network Application
    Classic,
}

/// Managed resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    /// Adopted device settings (bound by MAC)
    Device,
    /// Site RADIUS server settings
    RadiusServer,
    /// RADIUS user account
    RadiusUser,
    /// Remote-user VPN server
    VpnServer,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create (or bind) an object from a record
    Create(RecordArgs),

    /// Print the current state of an object
    Read(ReadArgs),

    /// Push a tracked record (with `id`) to the controller
    Update(RecordArgs),

    /// Delete a tracked record (with `id`)
    Delete(RecordArgs),

    /// Adopt an existing object into state
    ///
    /// Devices accept a remote id, a MAC, or `site:id` / `site:mac`.
    Import(ImportArgs),

    /// Look up a switch port profile by name
    #[command(alias = "pp")]
    PortProfile(PortProfileArgs),

    /// Look up a device by MAC
    DeviceLookup(DeviceLookupArgs),

    /// Check a record offline and print the controller payload it encodes to
    Validate(RecordArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Resource type
    pub kind: ResourceKind,

    /// Record file (JSON or YAML); `-` or omitted reads stdin
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Resource type
    pub kind: ResourceKind,

    /// Remote object id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Resource type
    pub kind: ResourceKind,

    /// Import id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct PortProfileArgs {
    /// Profile name
    #[arg(long, short = 'n', default_value = "All")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeviceLookupArgs {
    /// Device MAC address (any common notation)
    #[arg(long, short = 'm')]
    pub mac: String,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
