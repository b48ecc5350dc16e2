//! Legality filtering and game-state queries.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveList};
use crate::color::Color;
use crate::movegen::pseudo_destinations;
use crate::piece::{Cell, Piece};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

impl Board {
    /// Return `true` if any piece of `by` attacks `sq` (castling excluded).
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, _)| pseudo_destinations(self, from, false).contains(sq))
    }

    /// Return `true` if `color`'s king is attacked. A missing king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_attacked(king, !color),
            None => false,
        }
    }

    /// Keep the candidates from `pseudo` that do not leave `color`'s king in check.
    ///
    /// Each candidate is tested by a plain relocation on a scratch copy; the
    /// castling rook shift and promotion cannot change whether the mover's
    /// own king is attacked.
    pub fn filter_legal(&self, sq: Square, pseudo: SquareSet, color: Color) -> SquareSet {
        let mover = self.cell(sq);
        pseudo
            .iter()
            .filter(|&to| {
                let mut scratch = *self;
                scratch.set(to, mover);
                scratch.set(sq, Cell::Empty);
                !scratch.is_in_check(color)
            })
            .collect()
    }

    /// Legal destinations of the piece on `sq`, castling included. Empty for an empty square.
    pub fn legal_destinations(&self, sq: Square) -> SquareSet {
        match self.cell(sq).color() {
            Some(color) => self.filter_legal(sq, pseudo_destinations(self, sq, true), color),
            None => SquareSet::EMPTY,
        }
    }

    /// All legal moves of `color`, sources in index order.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut list = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            for to in self.legal_destinations(from) {
                list.push(Move::new(from, to));
            }
        }
        list
    }

    /// Return `true` if `color` has at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.legal_destinations(from).is_empty())
    }

    /// In check with no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check with no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Return `true` if `color` may castle toward `side` right now.
    ///
    /// Requires the right to be set, king and rook on their home squares,
    /// empty squares between them, the king not in check, and no transit
    /// square attacked.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling().has(color, side) {
            return false;
        }
        let row = color.back_row();
        let king_home = Square::at(row, CastleSide::KING_HOME_COL);
        let rook_home = Square::at(row, side.rook_col());
        let king = Cell::Occupied(Piece::new(color, PieceKind::King));
        let rook = Cell::Occupied(Piece::new(color, PieceKind::Rook));
        if self.cell(king_home) != king || self.cell(rook_home) != rook {
            return false;
        }
        if side
            .between_cols()
            .iter()
            .any(|&col| !self.cell(Square::at(row, col)).is_empty())
        {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }
        side.transit_cols().iter().all(|&col| {
            let mut scratch = *self;
            scratch.set(king_home, Cell::Empty);
            scratch.set(Square::at(row, col), king);
            !scratch.is_in_check(color)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::piece::{Cell, Piece};
    use crate::square::Square;

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(Square::E1, Cell::Occupied(Piece::WHITE_KING));
        board.set(Square::A1, Cell::Occupied(Piece::WHITE_ROOK));
        board.set(Square::H1, Cell::Occupied(Piece::WHITE_ROOK));
        board.set(Square::E8, Cell::Occupied(Piece::BLACK_KING));
        board.set_castling(CastleRights::WHITE_BOTH);
        board
    }

    #[test]
    fn starting_position_has_20_moves() {
        let board = Board::starting_position();
        assert_eq!(board.legal_moves(Color::White).len(), 20);
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
        assert!(!board.is_stalemate(Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = Board::empty();
        board.set(Square::D4, Cell::Occupied(Piece::BLACK_QUEEN));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn pinned_piece_cannot_leave_line() {
        let mut board = Board::empty();
        board.set(Square::E1, Cell::Occupied(Piece::WHITE_KING));
        board.set(Square::E2, Cell::Occupied(Piece::WHITE_KNIGHT));
        board.set(Square::E8, Cell::Occupied(Piece::BLACK_ROOK));
        board.set(Square::H8, Cell::Occupied(Piece::BLACK_KING));
        assert!(board.legal_destinations(Square::E2).is_empty());
    }

    #[test]
    fn check_must_be_answered() {
        let mut board = Board::empty();
        board.set(Square::E1, Cell::Occupied(Piece::WHITE_KING));
        board.set(Square::A2, Cell::Occupied(Piece::WHITE_ROOK));
        board.set(Square::E8, Cell::Occupied(Piece::BLACK_ROOK));
        board.set(Square::A8, Cell::Occupied(Piece::BLACK_KING));
        assert!(board.is_in_check(Color::White));
        let rook = board.legal_destinations(Square::A2);
        assert_eq!(rook.iter().collect::<Vec<_>>(), vec![Square::E2]);
        for mv in board.legal_moves(Color::White).as_slice() {
            let mut scratch = board;
            let _ = scratch.apply(*mv);
            assert!(!scratch.is_in_check(Color::White), "{mv} leaves king in check");
        }
    }

    #[test]
    fn empty_square_has_no_legal_destinations() {
        let board = Board::starting_position();
        assert!(board.legal_destinations(Square::E4).is_empty());
    }

    #[test]
    fn both_castles_available() {
        let board = castling_board();
        assert!(board.can_castle(Color::White, CastleSide::KingSide));
        assert!(board.can_castle(Color::White, CastleSide::QueenSide));
        let king = board.legal_destinations(Square::E1);
        assert!(king.contains(Square::G1));
        assert!(king.contains(Square::C1));
    }

    #[test]
    fn castling_requires_right() {
        let mut board = castling_board();
        board.set_castling(CastleRights::WHITE_QUEEN);
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
        assert!(board.can_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let mut board = castling_board();
        board.set(Square::B1, Cell::Occupied(Piece::WHITE_KNIGHT));
        assert!(!board.can_castle(Color::White, CastleSide::QueenSide));
        assert!(board.can_castle(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn castling_not_through_attacked_square() {
        let mut board = castling_board();
        board.set(Square::A6, Cell::Occupied(Piece::BLACK_BISHOP));
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
        assert!(board.can_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn queenside_ignores_attack_on_b_file() {
        let mut board = castling_board();
        board.set(Square::B8, Cell::Occupied(Piece::BLACK_ROOK));
        assert!(board.can_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut board = castling_board();
        board.set(Square::E5, Cell::Occupied(Piece::BLACK_ROOK));
        assert!(board.is_in_check(Color::White));
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
        assert!(!board.can_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn king_and_queen_stalemate() {
        let mut board = Board::empty();
        board.set(Square::H8, Cell::Occupied(Piece::BLACK_KING));
        board.set(Square::G6, Cell::Occupied(Piece::WHITE_QUEEN));
        board.set(Square::F7, Cell::Occupied(Piece::WHITE_KING));
        assert!(board.is_stalemate(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
        assert!(!board.has_legal_move(Color::Black));
    }
}
