//! Pawn destinations: pushes and diagonal captures. No en passant.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

pub(super) fn destinations(board: &Board, sq: Square, us: Color) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    let dir = us.forward();

    if let Some(one) = sq.offset(dir, 0)
        && board.cell(one).is_empty()
    {
        set.insert(one);
        if sq.row() == us.pawn_row()
            && let Some(two) = sq.offset(2 * dir, 0)
            && board.cell(two).is_empty()
        {
            set.insert(two);
        }
    }

    for dcol in [-1, 1] {
        if let Some(target) = sq.offset(dir, dcol)
            && board.cell(target).holds(!us)
        {
            set.insert(target);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::pseudo_destinations;
    use crate::piece::{Cell, Piece};
    use crate::square::Square;

    #[test]
    fn double_push_only_from_start_row() {
        let mut board = Board::empty();
        board.set(Square::E2, Cell::Occupied(Piece::WHITE_PAWN));
        board.set(Square::D3, Cell::Occupied(Piece::WHITE_PAWN));
        let from_start = pseudo_destinations(&board, Square::E2, false);
        assert!(from_start.contains(Square::E3));
        assert!(from_start.contains(Square::E4));
        let advanced = pseudo_destinations(&board, Square::D3, false);
        assert_eq!(advanced.iter().collect::<Vec<_>>(), vec![Square::D4]);
    }

    #[test]
    fn blocked_push() {
        let mut board = Board::empty();
        board.set(Square::E7, Cell::Occupied(Piece::BLACK_PAWN));
        board.set(Square::E6, Cell::Occupied(Piece::WHITE_KNIGHT));
        assert!(pseudo_destinations(&board, Square::E7, false).is_empty());

        board.set(Square::E6, Cell::Empty);
        board.set(Square::E5, Cell::Occupied(Piece::WHITE_KNIGHT));
        let dests = pseudo_destinations(&board, Square::E7, false);
        assert_eq!(dests.iter().collect::<Vec<_>>(), vec![Square::E6]);
    }

    #[test]
    fn diagonal_captures_enemy_only() {
        let mut board = Board::empty();
        board.set(Square::E4, Cell::Occupied(Piece::WHITE_PAWN));
        board.set(Square::D5, Cell::Occupied(Piece::BLACK_KNIGHT));
        board.set(Square::F5, Cell::Occupied(Piece::WHITE_KNIGHT));
        let dests = pseudo_destinations(&board, Square::E4, false);
        assert!(dests.contains(Square::D5));
        assert!(!dests.contains(Square::F5));
        assert!(dests.contains(Square::E5));
        assert_eq!(dests.len(), 2);
    }

    #[test]
    fn edge_file_capture_stays_on_board() {
        let mut board = Board::empty();
        board.set(Square::A7, Cell::Occupied(Piece::BLACK_PAWN));
        board.set(Square::B6, Cell::Occupied(Piece::WHITE_ROOK));
        let dests = pseudo_destinations(&board, Square::A7, false);
        assert_eq!(dests.len(), 3);
        assert!(dests.contains(Square::B6));
    }
}
