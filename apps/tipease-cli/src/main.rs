//! # TipEase Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr, so stdout carries only calculator output)
//! 3. Load the advisor configuration
//! 4. Run the subcommand

mod cli;
mod commands;
mod error;
mod render;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tipease_advisor::{AdvisorConfig, AdvisorError, FairSplitAdvisor};

use crate::cli::{Cli, Commands};
use crate::error::{CliError, CliResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Split(ref args) => {
            commands::split::run(args, &mut std::io::stdout())?;
        }
        Commands::Advise(ref args) => {
            let advisor = build_advisor(&cli)?;
            commands::advise::run(args, &advisor, &mut std::io::stdout()).await?;
        }
        Commands::Interactive => {
            let advisor = build_advisor(&cli)?;
            info!("Starting interactive session");
            commands::interactive::run(advisor).await?;
        }
        Commands::Config(ref command) => {
            commands::config::run(command, cli.config.clone(), &mut std::io::stdout())?;
        }
    }

    Ok(())
}

/// Installs the stderr subscriber. `--log-level` wins over `RUST_LOG`.
fn init_tracing(level: Option<&str>) -> CliResult<()> {
    let filter = match level {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| CliError::LogFilter(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// An explicit `--config` must exist and load; the default location may be
/// missing or broken.
fn build_advisor(cli: &Cli) -> CliResult<FairSplitAdvisor> {
    let config = match cli.config {
        Some(ref path) => {
            if !path.is_file() {
                return Err(CliError::ConfigNotFound(path.display().to_string()));
            }
            AdvisorConfig::load(Some(path.clone())).map_err(config_failure)?
        }
        None => AdvisorConfig::load_or_default(None),
    };

    debug!(backend = %config.backend_kind(), "Advisor configured");
    FairSplitAdvisor::from_config(&config).map_err(config_failure)
}

fn config_failure(err: AdvisorError) -> CliError {
    if err.is_config_error() {
        CliError::BadConfig(err)
    } else {
        CliError::Advisor(err)
    }
}
