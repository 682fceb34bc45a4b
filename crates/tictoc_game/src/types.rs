//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Value held by a single board cell.
///
/// The same type names the players: `Cell::X` is the human side and
/// `Cell::O` the random opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cell {
    /// Marked by player X (moves first).
    X,
    /// Marked by player O.
    O,
    /// Unmarked.
    #[default]
    Empty,
}

impl Cell {
    /// Returns true for `Cell::Empty`.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Status of a game, always derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    /// Moves are still accepted.
    Active,
    /// X completed a line.
    WinnerX,
    /// O completed a line.
    WinnerO,
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true for every status except `Active`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }
}

/// 3x3 tic-tac-toe board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::From,
)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; Board::SIZE],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Overwrites the cell at `pos`. Returns `None` when out of bounds.
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) -> Option<()> {
        let slot = self.cells.get_mut(pos)?;
        *slot = cell;
        Some(())
    }

    /// Checks if a cell is empty. Out-of-bounds positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; Board::SIZE] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Positions of all empty cells, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos)?,
                    Cell::X => f.write_str("X")?,
                    Cell::O => f.write_str("O")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
