//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tipease_core::types::TipSelection;

/// TipEase - split a bill and its tip
#[derive(Debug, Parser)]
#[command(name = "tipease")]
#[command(about = "Split a bill and its tip, with fair-split suggestions")]
#[command(version)]
pub struct Cli {
    /// Path to advisor configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. "debug", "tipease_advisor=trace"), overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute tip, total and each person's share
    Split(SplitArgs),
    /// Ask how to share a tip that does not split evenly
    Advise(AdviseArgs),
    /// Edit the bill line by line and request suggestions
    Interactive,
    /// Manage the advisor configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write the default advisor configuration
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Bill amount, e.g. 50.00
    #[arg(short, long, default_value = "")]
    pub bill: String,

    /// Tip preset (10, 15, 20) or "custom"
    #[arg(short, long, default_value_t = TipSelection::default())]
    pub tip: TipSelection,

    /// Custom tip percentage; selects the custom tip
    #[arg(long)]
    pub custom_tip: Option<String>,

    /// Number of people
    #[arg(short, long, default_value = "1")]
    pub people: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AdviseArgs {
    /// Tip amount, e.g. 7.50
    #[arg(long)]
    pub tip_amount: String,

    /// Number of people
    #[arg(short, long)]
    pub people: String,

    /// Also print the instruction sent to the text generator
    #[arg(long)]
    pub show_prompt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::parse_from([
            "tipease", "split", "--bill", "50", "--tip", "20", "--people", "4", "--json",
        ]);
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.bill, "50");
                assert_eq!(args.tip, TipSelection::Preset(20));
                assert_eq!(args.people, "4");
                assert!(args.json);
                assert!(args.custom_tip.is_none());
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults_and_globals() {
        let cli = Cli::parse_from(["tipease", "split", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.tip, TipSelection::Preset(15));
                assert_eq!(args.people, "1");
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["tipease", "split", "--tip", "17"]).is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::parse_from(["tipease", "config", "init", "--force", "-c", "a.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        match cli.command {
            Commands::Config(ConfigCommand::Init { force }) => assert!(force),
            other => panic!("expected config init, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_advise() {
        let cli = Cli::parse_from([
            "tipease", "advise", "--tip-amount", "7.50", "--people", "4", "--show-prompt",
        ]);
        match cli.command {
            Commands::Advise(args) => {
                assert_eq!(args.tip_amount, "7.50");
                assert!(args.show_prompt);
            }
            other => panic!("expected advise, got {other:?}"),
        }
    }
}
