//! Tic Tac Toe - terminal front end
//!
//! Opens the game menu, or prints the saved history with `tictactoe history`.

#![warn(missing_docs)]

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tictactoe::cli::{Cli, Command};
use tictactoe::{AppConfig, GameEngine, GameSession, HistoryStore, LobbyController, listing_lines};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(path) = &cli.history {
        config = config.with_history_path(path);
    }
    config.validate()?;

    init_tracing(config.log_path())?;
    info!(config = ?config, "Starting tictactoe");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::History => run_history(&config),
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Logs go to a file so they do not interfere with the terminal UI.
fn init_tracing(log_path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Print every stored game to stdout.
#[instrument(skip(config))]
fn run_history(config: &AppConfig) -> Result<()> {
    let store = HistoryStore::new(config.history_path());
    let entries = store.list()?;
    info!(games = entries.len(), "Printing history");
    for line in listing_lines(&entries) {
        println!("{}", line);
    }
    Ok(())
}

/// Run the terminal UI until the user quits.
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    let session = GameSession::new(
        GameEngine::new(*config.default_mode()),
        HistoryStore::new(config.history_path()),
    );
    let mut controller = LobbyController::new(session, *config.reset_key());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Lobby loop error");
    }
    res
}
