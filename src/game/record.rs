//! Read-only serializable projection of a game.

use super::entity::{Game, GameId};
use super::types::{Board, Coord};
use serde::{Deserialize, Serialize};

/// Snapshot of a game as exposed to the hosting layer.
///
/// Carries no behavior: the lifecycle state appears as its string tag and
/// the board as the full grid. These are the only fields a caller ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The game identifier.
    pub id: GameId,
    /// Name of the first player.
    pub player1: String,
    /// Name of the second player.
    pub player2: String,
    /// Lifecycle state tag: `new`, `in progress`, `draw`, `player 1 won`
    /// or `player 2 won`.
    pub state: String,
    /// The full board grid.
    pub board: Board,
    /// Coordinates of accepted moves in chronological order.
    pub history: Vec<Coord>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().to_string(),
            player1: game.player1().to_string(),
            player2: game.player2().to_string(),
            state: game.state().to_string(),
            board: game.board().clone(),
            history: game.history().to_vec(),
        }
    }
}
