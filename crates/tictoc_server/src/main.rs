//! Tictoc - tic-tac-toe HTTP server

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictoc_game::GameRegistry;
use tictoc_server::ServerConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_env(|key| std::env::var(key).ok())
    .with_overrides(cli.host, cli.port);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(host = %config.host(), port = config.port(), "Starting tictoc server");

    let listener =
        tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server will listen on http://{}:{}", config.host(), config.port());

    tictoc_server::serve(listener, GameRegistry::new(), shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
