//! Typed failures for move validation.
//!
//! Every rejection is a recoverable, caller-visible value. A failed move
//! leaves the game untouched; retrying is a caller decision.

use super::types::{Coord, GameState, Player};
use derive_more::{Display, Error};

/// Why a proposed board is not reachable by a single legal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveReason {
    /// The proposed board is identical to the current one.
    #[display("no move was made")]
    NoChange,
    /// More than one cell changed.
    #[display("{count} cells changed, expected exactly one")]
    MultipleChanges {
        /// Number of differing cells.
        count: usize,
    },
    /// The differing cell lost its mark instead of gaining one.
    #[display("mark removed at {coord}")]
    MarkRemoved {
        /// The cell that was cleared.
        coord: Coord,
    },
    /// The differing cell was already occupied.
    #[display("occupied cell {coord} was overwritten")]
    Overwrite {
        /// The cell that was overwritten.
        coord: Coord,
    },
}

/// Rejection of a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The proposed board is not reachable from the current one by exactly
    /// one legal placement.
    #[display("invalid move: {reason}")]
    InvalidMove {
        /// What shape of illegal transition was detected.
        reason: InvalidMoveReason,
    },
    /// A legal-shaped placement made by the player who is not due to move.
    #[display("{player} moved out of turn at {coord}")]
    MoveNotInTurn {
        /// The cell that gained the mark.
        coord: Coord,
        /// The player who moved out of turn.
        player: Player,
    },
    /// The game is already in a terminal state.
    #[display("game has already finished ({state})")]
    GameNotInProgress {
        /// The terminal state the game is frozen in.
        state: GameState,
    },
}
