//! JSON bodies exchanged over HTTP.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tictoc_game::{Cell, Game, GameId, GameStatus};

/// Summary of a game, returned by `POST /game` and `GET /game/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Game id.
    pub id: GameId,
    /// Number of marked cells.
    pub turn_count: usize,
    /// Derived status.
    pub status: GameStatus,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().clone(),
            turn_count: game.turn_count(),
            status: game.status(),
        }
    }
}

/// Content of one cell, returned by the `/game/{id}/{pos}` routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct CellResponse {
    /// Game id.
    pub game_id: GameId,
    /// Board index, 0-8.
    pub board_position: usize,
    /// Mark held by the cell.
    pub value: Cell,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HealthResponse {
    /// Whole seconds since the server started.
    pub uptime: u64,
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}
