//! In-memory registry of live games, keyed by game id.
//!
//! The registry owns the map and hands out snapshots only; mutating calls
//! on one game are serialized by that entry's lock, so the validate-then-
//! commit sequence in [`Game::apply_move`] never interleaves. Distinct
//! games are fully independent.

use crate::game::{Board, Game, GameId, GameRecord, MoveError};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// No live game with the requested id.
    #[display("game {id} was not found")]
    NotFound {
        /// The id that failed to resolve.
        id: GameId,
    },
    /// The move was rejected by the game rules.
    #[display("[{id}] {error}")]
    Move {
        /// The game that rejected the move.
        id: GameId,
        /// The rejection itself, unchanged.
        error: MoveError,
    },
}

/// Shared store of all live games.
///
/// Cloning is cheap and every clone operates on the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<GameId, Arc<Mutex<Game>>>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("creating game registry");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts a new game between the two named players.
    ///
    /// The id is generated here and is unique across all live games.
    #[instrument(skip(self))]
    pub fn create(&self, player1: &str, player2: &str) -> GameRecord {
        let id = Uuid::new_v4().to_string();
        let game = Game::new(id.clone(), player1, player2);
        let record = game.record();

        let mut games = self.games.lock().unwrap();
        games.insert(id.clone(), Arc::new(Mutex::new(game)));
        info!(game_id = %id, player1, player2, "game registered");

        record
    }

    /// Returns the current snapshot of a game.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the id does not resolve.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<GameRecord, RegistryError> {
        let entry = self.entry(id)?;
        let game = entry.lock().unwrap();
        Ok(game.record())
    }

    /// Snapshots of every live game.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameRecord> {
        let games = self.games.lock().unwrap();
        let records: Vec<_> = games
            .values()
            .map(|entry| entry.lock().unwrap().record())
            .collect();
        debug!(count = records.len(), "listed games");
        records
    }

    /// Validates and applies a proposed board for the given game.
    ///
    /// Only that game's lock is held while mutating, so moves on different
    /// games never contend. The updated snapshot is returned on success.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id; any [`MoveError`]
    /// from the game itself is surfaced unchanged inside
    /// [`RegistryError::Move`], tagged with the game id.
    #[instrument(skip(self, proposed), fields(game_id = id))]
    pub fn apply_move(&self, id: &str, proposed: &Board) -> Result<GameRecord, RegistryError> {
        let entry = self.entry(id)?;
        let mut game = entry.lock().unwrap();
        game.apply_move(proposed).map_err(|error| RegistryError::Move {
            id: id.to_string(),
            error,
        })?;
        Ok(game.record())
    }

    /// Resolves an entry without holding the map lock afterwards.
    fn entry(&self, id: &str) -> Result<Arc<Mutex<Game>>, RegistryError> {
        let games = self.games.lock().unwrap();
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "game not found");
            RegistryError::NotFound { id: id.to_string() }
        })
    }
}
