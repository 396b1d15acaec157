pub mod check_config;
pub mod datacenters;
pub mod vm;

use clap::{Parser, Subcommand};

use crate::context::Context;
use crate::error::Result;

#[derive(Parser)]
#[command(
    name = "gandi",
    author,
    version,
    about = "Gandi hosting command-line tool",
    long_about = r#"Manage Gandi virtual machines from the command line.

API credentials are read from the environment (API_BASE_URL, API_TOKEN) or
from a .env file; use `--env-file` to point at another one.

Examples:
  gandi vm list --state running
  gandi vm create --hostname web1 --image "Debian 7" --password
  gandi vm delete web1 --background
  gandi datacenters --id
"#,
    after_help = "Use `gandi <subcommand> --help` to get subcommand specific options and usage examples."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Path to .env file
    #[arg(long, global = true)]
    pub env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Echo every API request and response on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage virtual machines
    Vm {
        #[command(subcommand)]
        sub: VmCommands,
    },
    /// List available datacenters
    Datacenters(datacenters::DatacentersArgs),
    /// Validate configuration (env vars / API credentials)
    #[command(
        about = "Validate configuration and ensure API connectivity.",
        long_about = "Check that API_BASE_URL and API_TOKEN are set, then validate them by fetching the datacenter list."
    )]
    CheckConfig,
}

#[derive(Subcommand)]
pub enum VmCommands {
    /// List virtual machines
    List(vm::ListArgs),
    /// Display information about virtual machines
    Info(vm::InfoArgs),
    /// Stop virtual machines
    Stop(vm::LifecycleArgs),
    /// Start virtual machines
    Start(vm::LifecycleArgs),
    /// Reboot virtual machines
    Reboot(vm::LifecycleArgs),
    /// Delete virtual machines, stopping running ones first
    #[command(long_about = "Delete virtual machines. Running machines are stopped first, since the API refuses to delete a running VM.")]
    Delete(vm::LifecycleArgs),
    /// Create a new virtual machine
    #[command(long_about = "Create a new virtual machine.\n\nWhen --ssh-key is not given the SSH_KEY setting is used. Run `gandi vm images` to see which disk image labels are available.")]
    Create(vm::CreateArgs),
    /// Update a virtual machine
    Update(vm::UpdateArgs),
    /// Open a console to a virtual machine
    Console(vm::ConsoleArgs),
    /// List available system images
    #[command(long_about = "List available system images for virtual machines.\n\nFilter by label, e.g.:\n  gandi vm images Ubuntu --datacenter FR\n  gandi vm images 'Ubuntu 10.04' --datacenter FR")]
    Images(vm::ImagesArgs),
}

/// Run one parsed command against `ctx`.
pub async fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Vm { sub } => match sub {
            VmCommands::List(args) => vm::list(ctx, args).await.map(drop),
            VmCommands::Info(args) => vm::info(ctx, args).await.map(drop),
            VmCommands::Stop(args) => vm::stop(ctx, args).await.map(drop),
            VmCommands::Start(args) => vm::start(ctx, args).await.map(drop),
            VmCommands::Reboot(args) => vm::reboot(ctx, args).await.map(drop),
            VmCommands::Delete(args) => vm::delete(ctx, args).await.map(drop),
            VmCommands::Create(args) => vm::create(ctx, args).await.map(drop),
            VmCommands::Update(args) => vm::update(ctx, args).await.map(drop),
            VmCommands::Console(args) => vm::console(ctx, args).await,
            VmCommands::Images(args) => vm::images(ctx, args).await.map(drop),
        },
        Commands::Datacenters(args) => datacenters::run(ctx, args).await.map(drop),
        Commands::CheckConfig => check_config::run(ctx).await,
    }
}
