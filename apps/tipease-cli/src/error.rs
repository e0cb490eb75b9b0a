//! CLI error type.

use thiserror::Error;

use tipease_advisor::AdvisorError;
use tipease_core::ValidationError;

/// Errors surfaced by the `tipease` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file given with `--config` does not exist.
    #[error("config file does not exist: {0}")]
    ConfigNotFound(String),

    /// Config file or `TIPEASE_*` variables are unusable.
    #[error("{0}\nrun 'tipease config init' for a default file, or check the TIPEASE_* variables")]
    BadConfig(AdvisorError),

    /// `config init` would overwrite an existing file.
    #[error("config file already exists: {0} (use --force to replace it)")]
    ConfigExists(String),

    /// No platform config directory and no `--config`.
    #[error("no config location available, pass --config")]
    NoConfigPath,

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    /// Interactive command not recognized.
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    /// Interactive command needs a value.
    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    /// Tip choice not among the presets.
    #[error(transparent)]
    InvalidChoice(#[from] ValidationError),

    #[error("could not write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log filter given with `--log-level` is not valid.
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

pub type CliResult<T> = Result<T, CliError>;
