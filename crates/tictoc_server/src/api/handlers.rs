//! Request handlers.

use super::dto::{CellResponse, GameResponse, HealthResponse};
use super::error::ApiError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::time::Instant;
use tictoc_game::{Board, Cell, GameId, GameRegistry};
use tracing::{debug, info, instrument};

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: GameRegistry,
    started: Instant,
}

impl AppState {
    /// Creates handler state around `registry`, starting the uptime clock.
    #[instrument(skip(registry))]
    pub fn new(registry: GameRegistry) -> Self {
        Self {
            registry,
            started: Instant::now(),
        }
    }

    /// Returns the game registry.
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }
}

/// Converts a path segment into a board index.
fn board_position(pos: i64) -> Result<usize, ApiError> {
    usize::try_from(pos)
        .ok()
        .filter(|&pos| pos < Board::SIZE)
        .ok_or(ApiError::InvalidPosition(pos))
}

/// `POST /game`
#[instrument(skip(state))]
pub async fn create_game(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let game = state.registry.create()?;
    info!(game_id = %game.id(), "Game created");
    Ok((StatusCode::CREATED, Json(GameResponse::from(&game))))
}

/// `GET /game/{id}`
#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.registry.load(&id)?;
    debug!(status = %game.status(), turn_count = game.turn_count(), "Game loaded");
    Ok(Json(GameResponse::from(&game)))
}

/// `GET /game/{id}/{pos}`
#[instrument(skip(state))]
pub async fn get_cell(
    State(state): State<AppState>,
    Path((id, pos)): Path<(String, i64)>,
) -> Result<Json<CellResponse>, ApiError> {
    let pos = board_position(pos)?;
    let game = state.registry.load(&id)?;
    let value = game.get_position_value(pos)?;
    Ok(Json(CellResponse::new(GameId::from(id), pos, value)))
}

/// `PATCH /game/{id}/{pos}`
#[instrument(skip(state))]
pub async fn play(
    State(state): State<AppState>,
    Path((id, pos)): Path<(String, i64)>,
) -> Result<Json<CellResponse>, ApiError> {
    let pos = board_position(pos)?;
    state.registry.update(&id, |game| game.make_move(pos))?;
    info!(game_id = %id, position = pos, "Move accepted");
    Ok(Json(CellResponse::new(GameId::from(id), pos, Cell::X)))
}

/// `GET /health`
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.started.elapsed().as_secs()))
}
