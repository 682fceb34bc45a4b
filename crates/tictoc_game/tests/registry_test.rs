//! Tests for the in-memory game registry.

use rand::rngs::mock::StepRng;
use std::thread;
use tictoc_game::Cell::{Empty as E, O, X};
use tictoc_game::{
    Board, Cell, Game, GameError, GameId, GameRegistry, GameStatus, MAX_ID_ATTEMPTS,
    RegistryError,
};

#[test]
fn test_unknown_id_is_not_found() {
    let registry = GameRegistry::new();
    assert!(!registry.exists("nope42"));
    assert_eq!(
        registry.get("nope42"),
        Err(RegistryError::NotFound(GameId::from("nope42")))
    );
    assert!(matches!(
        registry.load("nope42"),
        Err(RegistryError::NotFound(_))
    ));
}

#[test]
fn test_save_then_load_round_trip() {
    let registry = GameRegistry::new();
    let mut game = Game::new();
    game.make_move(4).unwrap();
    registry.save(&game);

    assert!(registry.exists(game.id().as_str()));
    let loaded = registry.load(game.id().as_str()).unwrap();
    assert_eq!(loaded, game);
    assert_eq!(registry.get(game.id().as_str()).unwrap(), *game.board());
}

#[test]
fn test_save_overwrites() {
    let registry = GameRegistry::new();
    let mut game = Game::reconstruct(GameId::from("abc123"), Board::new());
    registry.save(&game);
    game.set_position_value(0, X).unwrap();
    registry.save(&game);
    registry.save(&game);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.load("abc123").unwrap().get_position_value(0), Ok(X));
}

#[test]
fn test_load_recomputes_status() {
    let registry = GameRegistry::new();
    let game = Game::reconstruct(
        GameId::from("won001"),
        Board::from([O, O, O, X, X, E, X, E, E]),
    );
    registry.save(&game);
    assert_eq!(
        registry.load("won001").unwrap().status(),
        GameStatus::WinnerO
    );
}

#[test]
fn test_create_stores_fresh_game() {
    let registry = GameRegistry::new();
    assert!(registry.is_empty());

    let game = registry.create().unwrap();
    assert_eq!(game.id().as_str().len(), GameId::LENGTH);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(registry.get(game.id().as_str()).unwrap(), Board::new());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_create_gives_up_when_ids_keep_colliding() {
    let registry = GameRegistry::new();
    // A constant source always yields the same id.
    registry.create_with(&mut StepRng::new(0, 0)).unwrap();
    let result = registry.create_with(&mut StepRng::new(0, 0));
    assert_eq!(result, Err(RegistryError::IdSpaceExhausted(MAX_ID_ATTEMPTS)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_update_applies_move() {
    let registry = GameRegistry::new();
    let game = registry.create().unwrap();
    let id = game.id().as_str();

    registry.update(id, |game| game.make_move(0)).unwrap();

    let game = registry.load(id).unwrap();
    assert_eq!(game.get_position_value(0), Ok(X));
    assert_eq!(game.turn_count(), 2);
}

#[test]
fn test_update_failure_keeps_snapshot() {
    let registry = GameRegistry::new();
    let board = Board::from([X, X, X, O, O, E, E, E, E]);
    registry.save(&Game::reconstruct(GameId::from("done01"), board));

    let result = registry.update("done01", |game| game.make_move(5));
    assert_eq!(
        result,
        Err(RegistryError::Game(GameError::GameNotActive(
            GameStatus::WinnerX
        )))
    );
    assert_eq!(registry.get("done01").unwrap(), board);
}

#[test]
fn test_update_unknown_id() {
    let registry = GameRegistry::new();
    let result = registry.update("nope42", |game| game.make_move(0));
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
    assert!(registry.is_empty());
}

#[test]
fn test_clones_share_storage() {
    let registry = GameRegistry::new();
    let handle = registry.clone();
    let game = handle.create().unwrap();
    assert!(registry.exists(game.id().as_str()));
}

#[test]
fn test_concurrent_writes_to_distinct_cells_are_all_kept() {
    let registry = GameRegistry::new();
    registry.save(&Game::reconstruct(GameId::from("shared"), Board::new()));

    thread::scope(|scope| {
        for pos in 0..Board::SIZE {
            let registry = registry.clone();
            scope.spawn(move || {
                registry
                    .update("shared", |game| game.set_position_value(pos, X))
                    .unwrap();
            });
        }
    });

    let board = registry.get("shared").unwrap();
    assert!(board.cells().iter().all(|cell| *cell == X));
}

#[test]
fn test_concurrent_moves_on_same_cell_only_one_wins() {
    let registry = GameRegistry::new();
    registry.save(&Game::reconstruct(GameId::from("race01"), Board::new()));

    let results: Vec<Result<(), RegistryError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                scope.spawn(move || registry.update("race01", |game| game.make_move(4)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results.iter().all(|r| matches!(
        r,
        Ok(()) | Err(RegistryError::Game(GameError::PositionOccupied(4)))
    )));

    let board = registry.get("race01").unwrap();
    assert_eq!(board.get(4), Some(Cell::X));
    assert_eq!(board.occupied_count(), 2);
}
