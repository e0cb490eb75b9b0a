//! `tipease config`

use std::io::Write;
use std::path::PathBuf;

use tipease_advisor::AdvisorConfig;

use crate::cli::ConfigCommand;
use crate::error::{CliError, CliResult};

pub fn run<W: Write>(
    command: &ConfigCommand,
    config_path: Option<PathBuf>,
    out: &mut W,
) -> CliResult<()> {
    let path = config_path
        .or_else(AdvisorConfig::default_config_path)
        .ok_or(CliError::NoConfigPath)?;

    match command {
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists(path.display().to_string()));
            }
            AdvisorConfig::default().save(Some(path.clone()))?;
            writeln!(out, "Wrote default advisor config to {}", path.display())?;
        }
        ConfigCommand::Path => writeln!(out, "{}", path.display())?,
    }
    Ok(())
}
