//! Win detection over rows, columns and diagonals.

use super::super::types::{BOARD_SIZE, Board, Cell, Coord, Player};
use tracing::instrument;

/// Returns the owner of a line if every cell in it carries the same mark.
fn line_owner(board: &Board, line: impl IntoIterator<Item = Coord>) -> Option<Player> {
    let mut owner = None;
    for coord in line {
        match (board.get(coord), owner) {
            (Cell::Empty, _) => return None,
            (Cell::Marked(player), None) => owner = Some(player),
            (Cell::Marked(player), Some(first)) if player != first => return None,
            _ => {}
        }
    }
    owner
}

/// Checks whether any player owns a complete line.
///
/// Scans all 2N+2 lines (N rows, N columns, both diagonals) of the board
/// passed in. Every call examines the full board fresh; there is no
/// incremental win tracking to fall out of date.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for i in 0..BOARD_SIZE {
        if let Some(player) = line_owner(board, (0..BOARD_SIZE).map(|col| Coord::new(i, col))) {
            return Some(player);
        }
        if let Some(player) = line_owner(board, (0..BOARD_SIZE).map(|row| Coord::new(row, i))) {
            return Some(player);
        }
    }

    line_owner(board, (0..BOARD_SIZE).map(|i| Coord::new(i, i))).or_else(|| {
        line_owner(
            board,
            (0..BOARD_SIZE).map(|i| Coord::new(i, BOARD_SIZE - 1 - i)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, coords: &[(usize, usize)], player: Player) {
        for &(row, col) in coords {
            board.set(Coord::new(row, col), Cell::Marked(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Player::One);
        assert_eq!(winner(&board), Some(Player::One));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        place(&mut board, &[(0, 2), (1, 2), (2, 2)], Player::Two);
        assert_eq!(winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1), (2, 2)], Player::One);
        assert_eq!(winner(&board), Some(Player::One));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        place(&mut board, &[(0, 2), (1, 1), (2, 0)], Player::Two);
        assert_eq!(winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1)], Player::One);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1)], Player::One);
        place(&mut board, &[(0, 2)], Player::Two);
        assert_eq!(winner(&board), None);
    }
}
