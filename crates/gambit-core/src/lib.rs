//! Chess rules: board representation, move generation, legality, and repetition tracking.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod history;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod rules;
mod square;
mod square_set;

pub use board::Board;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveList};
pub use color::Color;
pub use error::{FenError, MoveError};
pub use fen::STARTING_FEN;
pub use history::{PositionKey, RepetitionTable};
pub use make_move::{MoveGuard, RookShift, Snapshot};
pub use movegen::pseudo_destinations;
pub use perft::{divide, perft};
pub use piece::{Cell, Piece};
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
pub use square_set::SquareSet;

/// Standard starting position with empty history.
pub fn initialize_standard_position() -> Position {
    Position::initialize_standard()
}
