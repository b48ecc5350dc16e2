//! Reversible move execution: apply returns a snapshot, undo consumes it.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::piece::{Cell, Piece};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Maps each square index to the castling rights that must be removed when
/// that square is the source or destination of any move.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

/// Rook relocation performed by a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookShift {
    pub from: Square,
    pub to: Square,
    /// Cell the rook landed on before it moved there.
    pub displaced: Cell,
}

/// Everything needed to undo one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a snapshot is the only way to undo the move"]
pub struct Snapshot {
    from: Cell,
    to: Cell,
    castling: CastleRights,
    rook: Option<RookShift>,
    promoted: bool,
}

impl Snapshot {
    /// Piece that stood on the destination before the move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.to.piece()
    }

    /// Piece that made the move, before any promotion.
    #[inline]
    pub fn mover(&self) -> Option<Piece> {
        self.from.piece()
    }

    /// Rook relocation if the move castled.
    #[inline]
    pub fn rook_shift(&self) -> Option<RookShift> {
        self.rook
    }

    /// Return `true` if a pawn was promoted to a queen.
    #[inline]
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

impl Board {
    /// Apply `mv` in place and return the snapshot that reverses it.
    ///
    /// An empty source square leaves the board untouched.
    pub fn apply(&mut self, mv: Move) -> Snapshot {
        let (from, to) = (mv.from(), mv.to());
        let mut snapshot = Snapshot {
            from: self.cell(from),
            to: self.cell(to),
            castling: self.castling(),
            rook: None,
            promoted: false,
        };
        let Cell::Occupied(mut piece) = snapshot.from else {
            return snapshot;
        };

        let mut rights = self.castling();
        if piece.kind == PieceKind::King {
            rights = rights.revoke_color(piece.color);
            snapshot.rook = self.castle_rook_shift(piece, from, to);
        }
        rights = rights
            .revoke(CASTLE_RIGHTS_REVOKE[from.index()])
            .revoke(CASTLE_RIGHTS_REVOKE[to.index()]);
        self.set_castling(rights);

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            piece.kind = PieceKind::Queen;
            snapshot.promoted = true;
        }

        self.set(to, Cell::Occupied(piece));
        self.set(from, Cell::Empty);

        if let Some(shift) = snapshot.rook {
            let rook = self.cell(shift.from);
            self.set(shift.to, rook);
            self.set(shift.from, Cell::Empty);
        }
        snapshot
    }

    /// Reverse `mv` using the snapshot returned when it was applied.
    pub fn undo(&mut self, mv: Move, snapshot: Snapshot) {
        if let Some(shift) = snapshot.rook {
            let rook = self.cell(shift.to);
            self.set(shift.from, rook);
            self.set(shift.to, shift.displaced);
        }
        self.set(mv.to(), snapshot.to);
        self.set(mv.from(), snapshot.from);
        self.set_castling(snapshot.castling);
    }

    /// Rook relocation for a king moving two columns from its home square, if
    /// the matching rook stands on its corner.
    fn castle_rook_shift(&self, king: Piece, from: Square, to: Square) -> Option<RookShift> {
        let row = king.color.back_row();
        if from.row() != row || to.row() != row || from.col() != CastleSide::KING_HOME_COL {
            return None;
        }
        let side = match to.col() as i8 - from.col() as i8 {
            2 => CastleSide::KingSide,
            -2 => CastleSide::QueenSide,
            _ => return None,
        };
        let rook_from = Square::at(row, side.rook_col());
        if self.cell(rook_from) != Cell::Occupied(Piece::new(king.color, PieceKind::Rook)) {
            return None;
        }
        let rook_to = Square::at(row, side.rook_target_col());
        Some(RookShift {
            from: rook_from,
            to: rook_to,
            displaced: self.cell(rook_to),
        })
    }
}

impl Position {
    /// Apply `mv` without touching the repetition history.
    #[inline]
    pub fn apply(&mut self, mv: Move) -> Snapshot {
        self.board_mut().apply(mv)
    }

    /// Reverse a move made with [`Position::apply`].
    #[inline]
    pub fn undo(&mut self, mv: Move, snapshot: Snapshot) {
        self.board_mut().undo(mv, snapshot);
    }

    /// Apply `mv` and return a guard that undoes it when dropped.
    pub fn apply_scoped(&mut self, mv: Move) -> MoveGuard<'_> {
        let snapshot = self.apply(mv);
        MoveGuard {
            position: self,
            mv,
            snapshot,
        }
    }
}

/// A move applied to a position for the lifetime of the guard.
///
/// Dereferences to the position; dropping the guard undoes the move.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
    mv: Move,
    snapshot: Snapshot,
}

impl MoveGuard<'_> {
    /// Snapshot of the guarded move.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    #[inline]
    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.position.undo(self.mv, self.snapshot);
    }
}
