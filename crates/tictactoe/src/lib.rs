//! Terminal tic-tac-toe with a persisted game history.
//!
//! # Architecture
//!
//! - **Engine**: game rules and the random opponent live in [`tictactoe_engine`]
//! - **History**: [`HistoryStore`], a JSON file of finished games
//! - **Session**: [`GameSession`] wires one engine to one store
//! - **Lobby**: [`LobbyController`] drives the menu, board and history screens
//! - **Config**: [`AppConfig`] from TOML, overridable from the [`cli`]
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameEngine, GameSession, HistoryStore, Mode};
//!
//! let mut session = GameSession::new(
//!     GameEngine::new(Mode::PvP),
//!     HistoryStore::new("tic_tac_toe_games.json"),
//! );
//! session.click(1, 1);
//! println!("{}", session.status_message());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod history;
mod lobby;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - History persistence
pub use history::{
    DEFAULT_HISTORY_FILE, HistoryEntry, HistoryError, HistoryStore, NO_GAMES_MESSAGE,
    listing_lines,
};

// Crate-level exports - Session
pub use session::GameSession;

// Crate-level exports - Lobby
pub use lobby::{
    BoardScreen, HistoryViewScreen, LobbyController, ModeSelectScreen, Screen, ScreenKind,
    ScreenTransition,
};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Board, Cell, GameEngine, GameRecord, GameResult, Mode, MoveError, MoveOutcome, Opponent,
    Player, Position, RandomOpponent,
};
