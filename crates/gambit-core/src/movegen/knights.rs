//! Knight destinations.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn destinations(board: &Board, sq: Square, us: Color) -> SquareSet {
    super::step_targets(board, sq, us, &KNIGHT_OFFSETS)
}
