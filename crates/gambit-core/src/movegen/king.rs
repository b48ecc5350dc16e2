//! King destinations, including castling targets.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn destinations(board: &Board, sq: Square, us: Color, include_castling: bool) -> SquareSet {
    let mut set = super::step_targets(board, sq, us, &KING_OFFSETS);
    if include_castling {
        for side in CastleSide::ALL {
            if board.can_castle(us, side) {
                set.insert(Square::at(us.back_row(), side.king_target_col()));
            }
        }
    }
    set
}
