//! Tictoc server library: HTTP access to single-player tic-tac-toe games.
//!
//! # Architecture
//!
//! - **Api**: axum router, JSON bodies and error mapping
//! - **Config**: host/port/log filter from TOML, environment and CLI
//!
//! Game rules and storage live in [`tictoc_game`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
mod config;

pub use api::{AppState, router};
pub use config::{ConfigError, ServerConfig};

use tictoc_game::GameRegistry;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Serves the game API on `listener` until `shutdown` resolves.
#[instrument(skip_all)]
pub async fn serve<F>(
    listener: TcpListener,
    registry: GameRegistry,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = router(AppState::new(registry));
    info!(addr = ?listener.local_addr().ok(), "Server ready");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}
