//! In-memory game registry.

use crate::{Board, Game, GameError, GameId, RegistryError};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Maximum id draws before [`GameRegistry::create`] gives up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Stores a board snapshot per game id.
///
/// Cloning yields another handle to the same map. Status and turn count are
/// not stored; they are recomputed from the board when a game is loaded.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<GameId, Board>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    // Snapshots are `Copy` and written with a single insert, so a map left
    // behind by a panicking holder is still consistent.
    fn games(&self) -> MutexGuard<'_, HashMap<GameId, Board>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if a snapshot is stored under `id`.
    #[instrument(skip(self))]
    pub fn exists(&self, id: &str) -> bool {
        let exists = self.games().contains_key(id);
        debug!(exists, "Checked game existence");
        exists
    }

    /// Returns the raw board stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no game has that id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Board, RegistryError> {
        self.games().get(id).copied().ok_or_else(|| {
            debug!("Game not found");
            RegistryError::NotFound(GameId::from(id))
        })
    }

    /// Rebuilds the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no game has that id.
    #[instrument(skip(self))]
    pub fn load(&self, id: &str) -> Result<Game, RegistryError> {
        let board = self.get(id)?;
        Ok(Game::reconstruct(GameId::from(id), board))
    }

    /// Stores the game's current board, replacing any previous snapshot.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn save(&self, game: &Game) {
        self.games().insert(game.id().clone(), *game.board());
        info!("Create/update game");
    }

    /// Creates and stores a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdSpaceExhausted`] if every drawn id was
    /// already taken.
    pub fn create(&self) -> Result<Game, RegistryError> {
        self.create_with(&mut rand::thread_rng())
    }

    /// Same as [`GameRegistry::create`], drawing ids from `rng`.
    #[instrument(skip_all)]
    pub fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Game, RegistryError> {
        let mut games = self.games();
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let game = Game::new_with(&mut *rng);
            if games.contains_key(game.id()) {
                warn!(game_id = %game.id(), attempt, "Generated id already in use");
                continue;
            }
            games.insert(game.id().clone(), *game.board());
            info!(game_id = %game.id(), "Created game");
            return Ok(game);
        }
        Err(RegistryError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    /// Loads the game under `id`, applies `f`, and stores the result, all
    /// while holding the registry lock.
    ///
    /// The snapshot is only written back when `f` succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown id and
    /// [`RegistryError::Game`] when `f` fails.
    #[instrument(skip(self, f))]
    pub fn update<T, F>(&self, id: &str, f: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError>,
    {
        let mut games = self.games();
        let board = games.get(id).copied().ok_or_else(|| {
            debug!("Game not found");
            RegistryError::NotFound(GameId::from(id))
        })?;

        let mut game = Game::reconstruct(GameId::from(id), board);
        let output = f(&mut game)?;

        games.insert(game.id().clone(), *game.board());
        info!(turn_count = game.turn_count(), status = %game.status(), "Game updated");
        Ok(output)
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games().len()
    }

    /// Returns true if no game is stored.
    pub fn is_empty(&self) -> bool {
        self.games().is_empty()
    }
}
