//! Sliding piece (bishop, rook, queen) destinations by ray casting.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Cell;
use crate::square::Square;
use crate::square_set::SquareSet;

pub(super) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk each ray until the edge. An enemy piece ends the ray and is included;
/// an own piece ends it and is not.
pub(super) fn destinations(board: &Board, sq: Square, us: Color, rays: &[(i8, i8)]) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for &(drow, dcol) in rays {
        let mut current = sq;
        while let Some(next) = current.offset(drow, dcol) {
            match board.cell(next) {
                Cell::Empty => set.insert(next),
                Cell::Occupied(piece) => {
                    if piece.color != us {
                        set.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    set
}
