//! Mapping of failures to HTTP responses.

use super::dto::ErrorBody;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tictoc_game::{GameError, RegistryError};
use tracing::{error, warn};

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "Not found (game does not exist)";

/// Body sent with every 503.
pub const UNAVAILABLE_BODY: &str = "Service Unavailable";

/// Error returned by request handlers.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// Position outside 0-8, rejected before the registry is consulted.
    #[display("invalid board position")]
    InvalidPosition(i64),

    /// Registry or game rejected the operation.
    #[display("{}", _0)]
    Registry(RegistryError),
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Registry(err) => Some(err),
            ApiError::InvalidPosition(_) => None,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Registry(err)
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Registry(RegistryError::Game(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::InvalidPosition(pos) => {
                warn!(position = pos, "Rejected invalid board position");
                bad_request(message)
            }
            ApiError::Registry(RegistryError::NotFound(id)) => {
                warn!(game_id = %id, "Game not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
            }
            ApiError::Registry(RegistryError::Game(err)) => {
                warn!(error = %err, "Rejected move");
                bad_request(message)
            }
            ApiError::Registry(err @ RegistryError::IdSpaceExhausted(_)) => {
                error!(error = %err, "Request failed");
                (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_BODY).into_response()
            }
        }
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}
