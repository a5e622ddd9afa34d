//! Rules engine for grid games.
//!
//! Pure functions over borrowed boards: turn inference, diff-based move
//! legality and terminal-state detection. The rules never retain state
//! between calls; the game entity owns all mutation.

mod draw;
mod legality;
mod win;

pub use draw::is_full;
pub use legality::{Placement, turn, validate_transition};
pub use win::winner;

use super::types::{Board, GameState};
use tracing::instrument;

/// Determines the lifecycle state implied by a board.
///
/// Precedence: a completed line wins immediately, even if the board is
/// simultaneously full; a full board without a winner is a draw; anything
/// else leaves the game in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> GameState {
    if let Some(player) = winner(board) {
        return GameState::Won(player);
    }
    if is_full(board) {
        return GameState::Draw;
    }
    GameState::InProgress
}

#[cfg(test)]
mod tests {
    use super::super::types::{Cell, Coord, Player};
    use super::*;

    #[test]
    fn test_sparse_board_in_progress() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), Cell::Marked(Player::One));
        assert_eq!(evaluate_outcome(&board), GameState::InProgress);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // Full board where player 1 owns the top row.
        let mut board = Board::new();
        let layout = [
            [Player::One, Player::One, Player::One],
            [Player::Two, Player::Two, Player::One],
            [Player::One, Player::Two, Player::Two],
        ];
        for (row, players) in layout.iter().enumerate() {
            for (col, player) in players.iter().enumerate() {
                board.set(Coord::new(row, col), Cell::Marked(*player));
            }
        }

        assert_eq!(evaluate_outcome(&board), GameState::Won(Player::One));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // 1 2 1 / 2 1 1 / 2 1 2 has no complete line.
        let mut board = Board::new();
        let layout = [
            [Player::One, Player::Two, Player::One],
            [Player::Two, Player::One, Player::One],
            [Player::Two, Player::One, Player::Two],
        ];
        for (row, players) in layout.iter().enumerate() {
            for (col, player) in players.iter().enumerate() {
                board.set(Coord::new(row, col), Cell::Marked(*player));
            }
        }

        assert_eq!(evaluate_outcome(&board), GameState::Draw);
    }
}
