//! Finished-game snapshots.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::board::format_rows;
use crate::{Board, Cell, GameResult};

/// Immutable snapshot of a finished game: the final board and the result message.
///
/// Serializes as `{"board": [[" ", "X", "O"], ...], "result": "Player X wins!"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameRecord {
    /// Final board, row-major.
    board: [[Cell; 3]; 3],
    /// Human-readable result, e.g. `"It's a draw!"`.
    result: String,
}

impl GameRecord {
    /// Snapshots `board` together with the message for `result`.
    pub fn new(board: &Board, result: GameResult) -> Self {
        Self {
            board: board.rows(),
            result: result.to_string(),
        }
    }

    /// Formats the stored board as three `X | O | X` lines.
    pub fn board_lines(&self) -> Vec<String> {
        format_rows(&self.board)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
