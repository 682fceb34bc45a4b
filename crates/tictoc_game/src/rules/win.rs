//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// The eight winning lines as board indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` holds all three cells of any line.
///
/// Passing `Cell::Empty` asks whether a line is entirely unmarked, which is
/// never a win; callers use `Cell::X` or `Cell::O`.
#[instrument(level = "trace", skip(board))]
pub fn is_winner(board: &Board, player: Cell) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Some(player)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{Empty as E, O, X};

    fn board(cells: [Cell; 9]) -> Board {
        Board::from(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, X));
        assert!(!is_winner(&board, O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board([X, X, X, O, O, E, E, E, E]);
        assert!(is_winner(&board, X));
        assert!(!is_winner(&board, O));
    }

    #[test]
    fn test_winner_column() {
        let board = board([X, O, E, X, O, E, X, E, E]);
        assert!(is_winner(&board, X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board([X, X, O, E, O, E, O, E, X]);
        assert!(is_winner(&board, O));
        assert!(!is_winner(&board, X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board([X, X, E, E, O, E, E, E, E]);
        assert!(!is_winner(&board, X));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut cells = [E; 9];
            for pos in line {
                cells[pos] = O;
            }
            assert!(is_winner(&board(cells), O), "line {:?}", line);
        }
    }
}
