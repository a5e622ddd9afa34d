mod entity;
mod error;
mod record;
mod rules;
mod types;

pub use entity::{Game, GameId};
pub use error::{InvalidMoveReason, MoveError};
pub use record::GameRecord;
pub use rules::{Placement, evaluate_outcome, is_full, turn, validate_transition, winner};
pub use types::{BOARD_SIZE, Board, Cell, Coord, GameState, Player};
