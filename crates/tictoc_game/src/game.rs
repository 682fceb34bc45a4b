//! Game engine: one board, its derived status, and the move operation.

use crate::{Board, Cell, GameError, GameId, GameStatus, rules};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

/// A single-player tic-tac-toe game.
///
/// The human plays X; every accepted X move is answered by O picking
/// uniformly among the remaining empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Game {
    /// Identifier, fixed for the game's lifetime.
    id: GameId,
    /// Current board.
    board: Board,
}

impl Game {
    /// Creates a new game with a random id and an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::new_with(&mut rand::thread_rng())
    }

    /// Creates a new game, drawing the id from `rng`.
    #[instrument(skip(rng))]
    pub fn new_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = GameId::generate(rng);
        debug!(game_id = %id, "Created new game");
        Self {
            id,
            board: Board::new(),
        }
    }

    /// Rebuilds a game from a stored snapshot. The board is trusted as-is.
    #[instrument(skip_all, fields(game_id = %id))]
    pub fn reconstruct(id: GameId, board: Board) -> Self {
        Self { id, board }
    }

    /// Derived status of the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns true if `player` holds any complete line.
    pub fn is_winner(&self, player: Cell) -> bool {
        rules::is_winner(&self.board, player)
    }

    /// Number of marked cells, 0-9.
    pub fn turn_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Returns true if `position` addresses a cell (0-8).
    pub fn is_position_valid(&self, position: usize) -> bool {
        position < Board::SIZE
    }

    /// Returns true if the cell at `position` is empty.
    ///
    /// Out-of-range positions report `false`; validate with
    /// [`Game::is_position_valid`] first.
    pub fn is_position_empty(&self, position: usize) -> bool {
        self.board.is_empty(position)
    }

    /// Returns true while moves are accepted.
    pub fn is_game_active(&self) -> bool {
        self.status() == GameStatus::Active
    }

    /// Reads the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] when `position` is outside 0-8.
    pub fn get_position_value(&self, position: usize) -> Result<Cell, GameError> {
        self.board
            .get(position)
            .ok_or(GameError::InvalidPosition(position))
    }

    /// Writes `value` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] when `position` is outside 0-8
    /// and [`GameError::PositionOccupied`] when the cell is already marked.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn set_position_value(&mut self, position: usize, value: Cell) -> Result<(), GameError> {
        if !self.is_position_valid(position) {
            warn!(position, "Rejected write to invalid position");
            return Err(GameError::InvalidPosition(position));
        }
        if !self.is_position_empty(position) {
            warn!(position, "Rejected write to occupied position");
            return Err(GameError::PositionOccupied(position));
        }
        self.board
            .set(position, value)
            .ok_or(GameError::InvalidPosition(position))
    }

    /// Plays X at `position`, then lets O answer at random.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotActive`] if the game is already over, or the
    /// errors of [`Game::set_position_value`]. The board is unchanged on error.
    pub fn make_move(&mut self, position: usize) -> Result<(), GameError> {
        self.make_move_with(position, &mut rand::thread_rng())
    }

    /// Same as [`Game::make_move`], with O's reply drawn from `rng`.
    #[instrument(skip(self, rng), fields(game_id = %self.id))]
    pub fn make_move_with<R: Rng + ?Sized>(
        &mut self,
        position: usize,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let status = self.status();
        if status.is_terminal() {
            warn!(%status, "Move attempted on finished game");
            return Err(GameError::GameNotActive(status));
        }

        self.set_position_value(position, Cell::X)?;

        if self.is_game_active() {
            // Recomputed after X's move so the reply never lands on it.
            let empty = self.board.empty_positions();
            if let Some(&reply) = empty.choose(rng) {
                self.set_position_value(reply, Cell::O)?;
                debug!(reply, "Opponent replied");
            }
        }

        info!(
            position,
            status = %self.status(),
            turn_count = self.turn_count(),
            "Move applied\n{}",
            self.board
        );
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
