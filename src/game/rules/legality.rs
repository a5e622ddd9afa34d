//! Turn inference and board-diff move legality.

use super::super::error::{InvalidMoveReason, MoveError};
use super::super::types::{Board, Cell, Coord, Player};
use tracing::{debug, instrument};

/// An accepted placement: where the mark landed, and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Coordinate of the new mark.
    pub coord: Coord,
    /// The player who placed it.
    pub player: Player,
}

/// Infers whose turn it is from board occupancy.
///
/// Player 1 moves on even mark counts, player 2 on odd ones. The turn is
/// always derived from the board, never stored, so it cannot drift out of
/// sync with it.
#[instrument(skip(board))]
pub fn turn(board: &Board) -> Player {
    if board.mark_count() % 2 == 0 {
        Player::One
    } else {
        Player::Two
    }
}

/// Classifies the difference between the current board and a proposed one.
///
/// The only legal transition is exactly one empty cell gaining the mark of
/// the player to move. Any other difference is rejected: zero changes, more
/// than one change, a removed mark, an overwritten cell, or a mark by the
/// wrong player.
///
/// When several cells differ, only [`InvalidMoveReason::MultipleChanges`] is
/// reported, regardless of what those cells contain. For a single differing
/// cell the checks run in a fixed order and the first violation wins; reasons
/// are never aggregated.
#[instrument(skip(old, new))]
pub fn validate_transition(old: &Board, new: &Board) -> Result<Placement, MoveError> {
    let mut diff_count = 0;
    let mut first_diff = None;

    for coord in Board::coords() {
        let before = old.get(coord);
        let after = new.get(coord);
        if before != after {
            debug!(%coord, ?before, ?after, "cell changed");
            diff_count += 1;
            if first_diff.is_none() {
                first_diff = Some((coord, before, after));
            }
        }
    }

    let (coord, before, after) = match (diff_count, first_diff) {
        (1, Some(diff)) => diff,
        (count, Some(_)) => {
            return Err(MoveError::InvalidMove {
                reason: InvalidMoveReason::MultipleChanges { count },
            });
        }
        (_, None) => {
            return Err(MoveError::InvalidMove {
                reason: InvalidMoveReason::NoChange,
            });
        }
    };

    let player = match after {
        Cell::Empty => {
            return Err(MoveError::InvalidMove {
                reason: InvalidMoveReason::MarkRemoved { coord },
            });
        }
        Cell::Marked(player) => player,
    };

    if before != Cell::Empty {
        return Err(MoveError::InvalidMove {
            reason: InvalidMoveReason::Overwrite { coord },
        });
    }

    let expected = turn(old);
    if player != expected {
        return Err(MoveError::MoveNotInTurn { coord, player });
    }

    Ok(Placement { coord, player })
}
