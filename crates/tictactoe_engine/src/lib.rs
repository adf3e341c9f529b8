//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Player`], [`Mode`], [`GameResult`], [`Position`], [`Board`]
//! - **Rules**: win and draw detection over the 8 lines ([`rules`])
//! - **Opponent**: the computer side, [`RandomOpponent`] by default
//! - **Engine**: [`GameEngine`], the state machine the UI drives
//! - **Record**: [`GameRecord`], the snapshot emitted when a game ends
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameResult, Mode, Player};
//!
//! let mut engine = GameEngine::new(Mode::PvP);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     engine.make_move(row, col).unwrap();
//! }
//! let outcome = engine.make_move(0, 2).unwrap();
//! assert_eq!(engine.result(), GameResult::Win(Player::X));
//! assert_eq!(outcome.record().as_ref().unwrap().result(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod opponent;
mod position;
mod record;
pub mod rules;
mod types;

pub use board::{Board, format_rows};
pub use engine::{GameEngine, MoveOutcome};
pub use error::MoveError;
pub use opponent::{Opponent, RandomOpponent};
pub use position::Position;
pub use record::GameRecord;
pub use types::{Cell, GameResult, Mode, Player};
