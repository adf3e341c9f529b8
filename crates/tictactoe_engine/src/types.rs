//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single square of the board.
///
/// Serialized as `"X"`, `"O"` or `" "` so history files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    #[serde(rename = " ")]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns the one-character symbol used for display and storage.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mode {
    /// Two humans share the keyboard.
    #[default]
    PvP,
    /// A human plays X, the random opponent plays O.
    PvAI,
}

impl Mode {
    /// Returns the menu label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PvP => "Player vs Player",
            Mode::PvAI => "Player vs AI",
        }
    }
}

/// Current result of the game.
///
/// The display form is the human-readable message stored in history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum GameResult {
    /// Game is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Game ended with three in a row.
    #[display("Player {_0} wins!")]
    Win(Player),
    /// Board filled with no line completed.
    #[display("It's a draw!")]
    Draw,
}

impl GameResult {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(GameResult::Win(Player::X).to_string(), "Player X wins!");
        assert_eq!(GameResult::Win(Player::O).to_string(), "Player O wins!");
        assert_eq!(GameResult::Draw.to_string(), "It's a draw!");
        assert!(!GameResult::InProgress.is_terminal());
        assert!(GameResult::Draw.is_terminal());
    }

    #[test]
    fn test_cell_from_player() {
        assert_eq!(Cell::from(Player::O), Cell::O);
        assert_eq!(Cell::X.player(), Some(Player::X));
        assert_eq!(Cell::Empty.player(), None);
    }
}
