//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == Board::SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{Empty as E, O, X};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from([X, O, X, O, X, O, X, O, E]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
    }
}
