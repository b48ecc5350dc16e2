//! The mailbox board: an 8x8 grid of cells plus castling rights.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::{Cell, Piece};
use crate::piece_kind::PieceKind;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement and castling rights.
///
/// `Board` is `Copy`, so legality checks work on a scratch copy instead of
/// mutating the caller's board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed `[row][col]`; row 0 is Black's back rank.
    cells: [[Cell; 8]; 8],
    castling: CastleRights,
}

impl Board {
    /// A board with no pieces and no castling rights.
    pub const fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; 8]; 8],
            castling: CastleRights::NONE,
        }
    }

    /// Return the standard starting layout with all castling rights.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.set(
                    Square::at(color.back_row(), col as u8),
                    Cell::Occupied(Piece::new(color, kind)),
                );
                board.set(
                    Square::at(color.pawn_row(), col as u8),
                    Cell::Occupied(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Occupancy of a cell.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Piece on a square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).piece()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Square of `color`'s king, scanning in index order. `None` if the king is absent.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Cell::Occupied(Piece::new(color, PieceKind::King));
        Square::all().find(|&sq| self.cell(sq) == king)
    }

    /// All pieces of `color` with their squares, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.cell(sq) {
            Cell::Occupied(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of pieces of both colors, kings included.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen(Color::White))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
