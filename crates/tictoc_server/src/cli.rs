//! Command-line interface for tictoc_server.

use clap::Parser;

/// Tic-tac-toe HTTP server: you play X, a random opponent plays O
#[derive(Parser, Debug)]
#[command(name = "tictoc_server")]
#[command(about = "Single-player tic-tac-toe over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Host to bind to (overrides config and HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}
