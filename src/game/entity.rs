//! The game aggregate: identity, participants, board, history, lifecycle.

use super::error::MoveError;
use super::record::GameRecord;
use super::rules::{self, Placement};
use super::types::{Board, Coord, GameState, Player};
use tracing::{debug, info, instrument, warn};

/// Opaque unique identifier for a game.
pub type GameId = String;

/// A single match between two players.
///
/// The game is the sole owner of its board and history; all mutation goes
/// through [`Game::apply_move`], which either commits a full validated
/// transition or leaves every field exactly as it was.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    player1: String,
    player2: String,
    state: GameState,
    board: Board,
    history: Vec<Coord>,
}

impl Game {
    /// Creates a game with an empty board in state [`GameState::New`].
    ///
    /// The id is assigned by the hosting layer and never changes.
    #[instrument(skip_all, fields(game_id = %id))]
    pub fn new(id: GameId, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        info!("game created");
        Self {
            id,
            player1: player1.into(),
            player2: player2.into(),
            state: GameState::New,
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// The game identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the first player.
    pub fn player1(&self) -> &str {
        &self.player1
    }

    /// Name of the second player.
    pub fn player2(&self) -> &str {
        &self.player2
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of every accepted move, in chronological order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// The player due to move, derived from board occupancy.
    pub fn to_move(&self) -> Player {
        rules::turn(&self.board)
    }

    /// Validates a proposed board and commits it as the next state.
    ///
    /// On success the board is replaced, the new mark's coordinate is
    /// appended to the history and the lifecycle state is re-evaluated over
    /// the full board. On failure nothing is mutated; the returned error
    /// describes the rejection.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotInProgress`] if the game is already finished.
    /// - [`MoveError::InvalidMove`] if the proposed board is not reachable
    ///   by exactly one legal placement.
    /// - [`MoveError::MoveNotInTurn`] if the placement was made by the
    ///   player not due to move.
    #[instrument(skip(self, proposed), fields(game_id = %self.id))]
    pub fn apply_move(&mut self, proposed: &Board) -> Result<Placement, MoveError> {
        debug!(board = %proposed, "validating proposed board");

        if !self.state.is_open() {
            warn!(state = %self.state, "move submitted to finished game");
            return Err(MoveError::GameNotInProgress { state: self.state });
        }

        let placement = rules::validate_transition(&self.board, proposed).map_err(|error| {
            warn!(%error, "move rejected");
            error
        })?;

        self.board = proposed.clone();
        self.history.push(placement.coord);
        self.state = rules::evaluate_outcome(&self.board);

        match self.state {
            GameState::Won(player) => info!(%player, "winner found"),
            GameState::Draw => info!("draw"),
            _ => debug!(coord = %placement.coord, player = %placement.player, "move accepted"),
        }

        Ok(placement)
    }

    /// Read-only snapshot for the hosting layer.
    pub fn record(&self) -> GameRecord {
        GameRecord::from(self)
    }
}
