//! Game phase from remaining non-king material.

use gambit_core::{Position, PieceKind, Square};

use crate::eval::material::piece_value;

/// Non-king material of a full starting set for both sides:
/// 16 pawns, 4 knights, 4 bishops, 4 rooks, 2 queens.
pub const FULL_MATERIAL: f64 = 8000.0;

/// Normalized remaining material: 1.0 for the opening set, 0.0 for bare kings.
///
/// Clamped to `[0, 1]` so promotions cannot push it past the opening value.
pub fn phase_score(position: &Position) -> f64 {
    let total: i64 = Square::all()
        .filter_map(|sq| position.piece_on(sq))
        .filter(|piece| piece.kind != PieceKind::King)
        .map(|piece| piece_value(piece.kind))
        .sum();
    (total as f64 / FULL_MATERIAL).clamp(0.0, 1.0)
}
