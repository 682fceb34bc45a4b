//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is never stored; it is
//! recomputed from the cells every time it is asked for.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, is_winner};

use crate::{Board, Cell, GameStatus};
use tracing::instrument;

/// Derives the status of a board.
///
/// O is checked before X, so a constructed board where both players hold a
/// line reports `WinnerO`.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if is_winner(board, Cell::O) {
        GameStatus::WinnerO
    } else if is_winner(board, Cell::X) {
        GameStatus::WinnerX
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Active
    }
}
