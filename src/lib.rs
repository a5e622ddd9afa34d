//! Gridmatch - turn-based grid game tracking
//!
//! Tracks two-player games on a fixed 3×3 grid and validates each proposed
//! next board state against the game rules.
//!
//! # Architecture
//!
//! - **Game**: the aggregate owning board, history and lifecycle state
//! - **Rules**: pure turn inference, board-diff legality and outcome detection
//! - **Registry**: owned in-memory store with per-game serialization of moves
//!
//! Callers submit a complete proposed board rather than a move; the rules
//! engine diffs it against the current board, infers the acting player from
//! occupancy and accepts exactly one legal placement. Rejections are typed
//! values and never mutate the game.
//!
//! # Example
//!
//! ```
//! use gridmatch::{Cell, Coord, GameRegistry, Player};
//!
//! # fn example() -> Result<(), gridmatch::RegistryError> {
//! let registry = GameRegistry::new();
//! let game = registry.create("alice", "bob");
//!
//! let mut proposed = game.board.clone();
//! proposed.set(Coord::new(0, 0), Cell::Marked(Player::One));
//!
//! let updated = registry.apply_move(&game.id, &proposed)?;
//! assert_eq!(updated.state, "in progress");
//! assert_eq!(updated.history, vec![Coord::new(0, 0)]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod registry;

// Crate-level exports - Game types
pub use game::{
    BOARD_SIZE, Board, Cell, Coord, Game, GameId, GameRecord, GameState, InvalidMoveReason,
    MoveError, Placement, Player,
};

// Crate-level exports - Rules engine
pub use game::{evaluate_outcome, is_full, turn, validate_transition, winner};

// Crate-level exports - Registry
pub use registry::{GameRegistry, RegistryError};
