//! Core domain types for grid games.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// One of the two participants in a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Moves first; owns every even-numbered placement.
    #[display("player 1")]
    One,
    /// Moves second; owns every odd-numbered placement.
    #[display("player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Marked by a player.
    Marked(Player),
}

/// Zero-indexed board coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square grid of cells, fixed at [`BOARD_SIZE`]×[`BOARD_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Counts the marked cells on the board.
    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Marked(Player::One) => '1',
                    Cell::Marked(Player::Two) => '2',
                };
                f.write_str(if col > 0 { "|" } else { "" })?;
                write!(f, "{symbol}")?;
            }
            if row < BOARD_SIZE - 1 {
                f.write_str(" / ")?;
            }
        }
        Ok(())
    }
}

/// Lifecycle state of a game.
///
/// `New` and `InProgress` are the open states in which moves are accepted;
/// `Draw` and `Won` are terminal. The `Display` tag is the value exposed in
/// the read-only record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameState {
    /// Created, no moves yet.
    #[display("new")]
    New,
    /// At least one move accepted, not terminal.
    #[display("in progress")]
    InProgress,
    /// Board full with no winning line.
    #[display("draw")]
    Draw,
    /// A player completed a line.
    #[display("{_0} won")]
    Won(Player),
}

impl GameState {
    /// Whether the game still accepts moves.
    pub fn is_open(self) -> bool {
        matches!(self, GameState::New | GameState::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponents() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_mark_count() {
        let mut board = Board::new();
        assert_eq!(board.mark_count(), 0);

        board.set(Coord::new(0, 0), Cell::Marked(Player::One));
        board.set(Coord::new(2, 2), Cell::Marked(Player::Two));
        assert_eq!(board.mark_count(), 2);
    }

    #[test]
    fn test_coords_cover_board() {
        assert_eq!(Board::coords().count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_state_tags() {
        assert_eq!(GameState::New.to_string(), "new");
        assert_eq!(GameState::InProgress.to_string(), "in progress");
        assert_eq!(GameState::Draw.to_string(), "draw");
        assert_eq!(GameState::Won(Player::One).to_string(), "player 1 won");
        assert_eq!(GameState::Won(Player::Two).to_string(), "player 2 won");
    }

    #[test]
    fn test_terminal_states_not_open() {
        assert!(GameState::New.is_open());
        assert!(GameState::InProgress.is_open());
        assert!(!GameState::Draw.is_open());
        assert!(!GameState::Won(Player::One).is_open());
    }
}
