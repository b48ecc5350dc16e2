//! Pseudo-legal destination generation.
//!
//! Destinations obey piece movement, blocking and capture rules but ignore
//! whether the mover's own king is left in check. The legality filter in
//! [`crate::rules`] removes those.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Cell;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Pseudo-legal destinations of the piece on `sq`.
///
/// Castling destinations are only added for a king when `include_castling`
/// is set; attack detection passes `false`. Empty squares give an empty set.
pub fn pseudo_destinations(board: &Board, sq: Square, include_castling: bool) -> SquareSet {
    let Cell::Occupied(piece) = board.cell(sq) else {
        return SquareSet::EMPTY;
    };
    match piece.kind {
        PieceKind::Pawn => pawns::destinations(board, sq, piece.color),
        PieceKind::Knight => knights::destinations(board, sq, piece.color),
        PieceKind::Bishop => sliders::destinations(board, sq, piece.color, &sliders::DIAGONALS),
        PieceKind::Rook => sliders::destinations(board, sq, piece.color, &sliders::ORTHOGONALS),
        PieceKind::Queen => {
            sliders::destinations(board, sq, piece.color, &sliders::DIAGONALS)
                | sliders::destinations(board, sq, piece.color, &sliders::ORTHOGONALS)
        }
        PieceKind::King => king::destinations(board, sq, piece.color, include_castling),
    }
}

/// Collect single-step destinations for fixed-offset pieces, excluding own pieces.
fn step_targets(board: &Board, sq: Square, us: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(drow, dcol)| sq.offset(drow, dcol))
        .filter(|&target| !board.cell(target).holds(us))
        .collect()
}
