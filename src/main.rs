use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use gandi::api::{self, ApiClient, HttpDatacenters, HttpIaas, HttpImages};
use gandi::commands::{self, Cli};
use gandi::config::{self, Config};
use gandi::output::Output;
use gandi::params::TerminalPrompter;
use gandi::{Context, Result};

fn build_context(config: Config) -> Result<Context> {
    let client = ApiClient::new(&config)?;
    Ok(Context {
        iaas: Arc::new(HttpIaas::new(client.clone(), &config)),
        datacenters: Arc::new(HttpDatacenters::new(client.clone())),
        images: Arc::new(HttpImages::new(client)),
        prompter: Arc::new(TerminalPrompter),
        out: Output::stdout(),
        config,
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    api::set_verbose(cli.verbose);

    config::load_env_file(cli.env_file.as_deref());
    let config = Config::from_env();
    tracing::debug!(api_base_url = %config.api_base_url, "configuration loaded");

    let result = match build_context(config) {
        Ok(ctx) => commands::run(&ctx, cli.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::debug!(?e, "command failed");
        eprintln!("{} {}", yansi::Paint::new("Error:").red().bold(), e);
        process::exit(e.exit_code());
    }
}
