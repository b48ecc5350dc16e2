//! Material balance evaluation.
//!
//! All scores are returned from White's perspective (positive = White ahead).

use gambit_core::{Board, Color, PieceKind, Square};

use crate::eval::Score;

/// Material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   | 20000 |
pub const MATERIAL_VALUE: [Score; PieceKind::COUNT] = [100, 320, 330, 500, 900, 20_000];

/// Value of one piece kind.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    MATERIAL_VALUE[kind.index()]
}

/// Signed material sum over every occupied square.
pub fn material(board: &Board) -> Score {
    Square::all()
        .filter_map(|sq| board.piece_on(sq))
        .map(|piece| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
