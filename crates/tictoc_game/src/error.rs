//! Error types for the game engine and registry.

use crate::{GameId, GameStatus};

/// Error raised when reading or changing a board.
///
/// Every variant is a rejected operation: the board is left exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Position is outside 0-8.
    #[display("invalid board position")]
    InvalidPosition(usize),

    /// Target cell already holds a mark.
    #[display("board position occupied")]
    PositionOccupied(usize),

    /// Game already reached a terminal status.
    #[display("game not active")]
    GameNotActive(GameStatus),
}

impl std::error::Error for GameError {}

/// Error raised by [`GameRegistry`](crate::GameRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RegistryError {
    /// No snapshot is stored under the id.
    #[display("game {} does not exist in the registry", _0)]
    NotFound(GameId),

    /// Every generated id was already taken.
    #[display("could not allocate a free game id after {} attempts", _0)]
    IdSpaceExhausted(usize),

    /// The update closure rejected the change.
    #[display("{}", _0)]
    Game(GameError),
}

impl From<GameError> for RegistryError {
    fn from(err: GameError) -> Self {
        RegistryError::Game(err)
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Game(err) => Some(err),
            _ => None,
        }
    }
}
