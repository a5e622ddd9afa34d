//! Draw detection.

use super::super::types::{BOARD_SIZE, Board};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// A full board with no winning line is a draw; win detection takes
/// precedence and is checked first by the caller.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.mark_count() == BOARD_SIZE * BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::super::super::types::{Cell, Coord, Player};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Coord::new(1, 1), Cell::Marked(Player::One));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for coord in Board::coords() {
            board.set(coord, Cell::Marked(Player::One));
        }
        assert!(is_full(&board));
    }
}
