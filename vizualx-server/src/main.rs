//! Vizual X Sync Server Binary
//!
//! Serves the `/api/sync` endpoints, or runs a one-shot heartbeat check.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use vizualx_config::{ConfigLoader, VizualConfig};
use vizualx_server::{run_check, Server};
use vizualx_sync::{Provider, SyncService};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML or JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Server bind address, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Server port, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Probe providers once, print JSON and exit non-zero if any is unreachable
    Check {
        /// Only probe this provider (github, cloud/gcp, cdn/cloudflare)
        #[arg(long)]
        provider: Option<Provider>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;
    apply_cli_overrides(&mut config, &cli)?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    vizualx_logging::init_logging_from_config(&config.logging)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            Server::new(config)?.start().await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { provider } => {
            let service = SyncService::from_config(&config.sync, config.http.clone().into())?;
            let report = run_check(&service, provider).await?;

            println!("{}", serde_json::to_string_pretty(&report.body)?);

            Ok(if report.all_reachable {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut VizualConfig, cli: &Cli) -> Result<()> {
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    config.validate_all()?;
    Ok(())
}
