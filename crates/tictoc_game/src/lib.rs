//! Tic-tac-toe against a random opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Board`], [`GameStatus`], [`GameId`]
//! - **Rules**: pure win/draw evaluation over a board
//! - **Game**: the engine that validates and applies moves
//! - **Registry**: in-memory id → board store shared between requests
//!
//! # Example
//!
//! ```
//! use tictoc_game::{GameRegistry, GameStatus};
//!
//! # fn example() -> Result<(), tictoc_game::RegistryError> {
//! let registry = GameRegistry::new();
//! let game = registry.create()?;
//! registry.update(game.id().as_str(), |game| game.make_move(4))?;
//!
//! let game = registry.load(game.id().as_str())?;
//! assert_eq!(game.turn_count(), 2);
//! assert_eq!(game.status(), GameStatus::Active);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod game_id;
mod registry;
pub mod rules;
mod types;

pub use error::{GameError, RegistryError};
pub use game::Game;
pub use game_id::GameId;
pub use registry::{GameRegistry, MAX_ID_ATTEMPTS};
pub use types::{Board, Cell, GameStatus};
