//! HTTP surface of the game server.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/game` | [`create_game`](handlers::create_game) |
//! | GET | `/game/{id}` | [`get_game`](handlers::get_game) |
//! | GET | `/game/{id}/{pos}` | [`get_cell`](handlers::get_cell) |
//! | PATCH | `/game/{id}/{pos}` | [`play`](handlers::play) |
//! | GET | `/health` | [`health`](handlers::health) |

mod dto;
mod error;
mod handlers;

pub use dto::{CellResponse, ErrorBody, GameResponse, HealthResponse};
pub use error::{ApiError, NOT_FOUND_BODY, UNAVAILABLE_BODY};
pub use handlers::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tracing::info;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", post(handlers::create_game))
        .route("/game/{id}", get(handlers::get_game))
        .route(
            "/game/{id}/{pos}",
            get(handlers::get_cell).patch(handlers::play),
        )
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}
