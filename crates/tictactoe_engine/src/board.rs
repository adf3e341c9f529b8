//! 3x3 board storage.

use crate::{Cell, Player, Position};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major rows.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of the rows, suitable for snapshots.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        self.cells
    }

    /// Returns every empty position in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if the board has no empty cell left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().flatten().filter(|c| **c == mark).count()
    }

    /// Formats the board as three `X | O | X` lines.
    pub fn display(&self) -> String {
        format_rows(&self.cells)
    }
}

/// Formats row-major cells as three `X | O | X` lines joined by newlines.
pub fn format_rows(cells: &[[Cell; 3]; 3]) -> String {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.symbol())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
