//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Tic-tac-toe in the terminal, against a friend or a random AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a saved game history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the history file from the config
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the game menu in the terminal UI
    Play,

    /// Print previously finished games and exit
    History,

    /// Print the default configuration as TOML and exit
    DefaultConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play_with_default_config() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.history, None);
    }

    #[test]
    fn test_history_override() {
        let cli = Cli::parse_from(["tictactoe", "--history", "old.json", "history"]);
        assert_eq!(cli.command, Some(Command::History));
        assert_eq!(cli.history, Some(PathBuf::from("old.json")));
    }

    #[test]
    fn test_default_config_command() {
        let cli = Cli::parse_from(["tictactoe", "default-config"]);
        assert_eq!(cli.command, Some(Command::DefaultConfig));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
