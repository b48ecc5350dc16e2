//! FEN-style setup parsing and serialization.
//!
//! Placement and active color are required, castling is optional. En passant
//! and the move counters are accepted and ignored; this game has neither.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::{Cell, Piece};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a FEN string into a board and the side to move.
    pub fn from_fen(fen: &str) -> Result<(Board, Color), FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar {
                        character: c,
                    })?;
                    if col < 8 {
                        board.set(Square::at(rank_index as u8, col as u8), Cell::Occupied(piece));
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        let side = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = match fields.get(2) {
            Some(field) => CastleRights::from_fen(field)?,
            None => CastleRights::NONE,
        };
        board.set_castling(castling);

        for color in Color::ALL {
            let count = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count() as u32;
            if count != 1 {
                return Err(FenError::InvalidKingCount { color, count });
            }
        }

        Ok((board, side))
    }

    /// Serialize to a six-field FEN string with `side` to move.
    pub fn to_fen(&self, side: Color) -> String {
        let mut fen = String::with_capacity(90);
        for row in 0u8..8 {
            let mut empty = 0;
            for col in 0u8..8 {
                match self.cell(Square::at(row, col)) {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if row < 7 {
                fen.push('/');
            }
        }
        let side = match side {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{fen} {side} {} - 0 1", self.castling().to_fen())
    }
}

impl Position {
    /// Parse a FEN string into a position with empty history and the side to move.
    pub fn from_fen(fen: &str) -> Result<(Position, Color), FenError> {
        let (board, side) = Board::from_fen(fen)?;
        Ok((Position::from_board(board), side))
    }

    /// Serialize the board to FEN with `side` to move.
    pub fn to_fen(&self, side: Color) -> String {
        self.board().to_fen(side)
    }
}
