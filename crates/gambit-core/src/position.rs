//! Game position: the board plus repetition history and last moves.

use std::fmt;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveList};
use crate::color::Color;
use crate::error::MoveError;
use crate::history::{PositionKey, RepetitionTable};
use crate::piece::{Cell, Piece};
use crate::square::Square;
use crate::square_set::SquareSet;

/// A game in progress.
///
/// The side to move is not stored; every query that depends on it takes the
/// color explicitly.
#[derive(Clone)]
pub struct Position {
    board: Board,
    history: RepetitionTable,
    last_moves: [Option<Move>; Color::COUNT],
}

impl Position {
    /// Standard starting layout, all castling rights, empty history.
    pub fn initialize_standard() -> Position {
        Position::from_board(Board::starting_position())
    }

    /// Wrap a board with empty history.
    pub fn from_board(board: Board) -> Position {
        Position {
            board,
            history: RepetitionTable::new(),
            last_moves: [None; Color::COUNT],
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.board.cell(sq)
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        self.board.is_stalemate(color)
    }

    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.board.can_castle(color, side)
    }

    /// Legal destinations of the piece on `sq`; empty for an empty square.
    pub fn legal_destinations(&self, sq: Square) -> SquareSet {
        self.board.legal_destinations(sq)
    }

    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.board.legal_moves(color)
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.has_legal_move(color)
    }

    /// Key of the current position with `side` to move.
    #[inline]
    pub fn key(&self, side: Color) -> PositionKey {
        PositionKey::new(&self.board, side)
    }

    /// How many times the current position with `side` to move was recorded.
    pub fn repetition_count(&self, side: Color) -> u32 {
        self.history.count(&self.key(side))
    }

    /// Return `true` if the current position occurred at least three times.
    pub fn is_threefold(&self, side: Color) -> bool {
        self.repetition_count(side) >= 3
    }

    /// Record one occurrence of the current position with `side` to move.
    pub fn record_position(&mut self, side: Color) -> u32 {
        let key = self.key(side);
        self.history.increment(key)
    }

    /// The repetition table.
    pub fn history(&self) -> &RepetitionTable {
        &self.history
    }

    /// The last move `color` played through the recording path.
    #[inline]
    pub fn last_move(&self, color: Color) -> Option<Move> {
        self.last_moves[color.index()]
    }

    /// Play a move for real: apply it, record the resulting position with
    /// the opponent to move, and remember it as the mover's last move.
    ///
    /// Returns the captured piece, if any. Legality is the caller's concern.
    pub fn apply_move_and_record_history(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        let Cell::Occupied(mover) = self.cell(mv.from()) else {
            return Err(MoveError::EmptySource { square: mv.from() });
        };
        let snapshot = self.apply(mv);
        self.record_position(!mover.color);
        self.last_moves[mover.color.index()] = Some(mv);
        Ok(snapshot.captured())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initialize_standard()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("placement", &self.to_fen(Color::White))
            .field("keys", &self.history.len())
            .field("last_moves", &self.last_moves)
            .finish()
    }
}
