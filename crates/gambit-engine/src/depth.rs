//! Adaptive search depth.
//!
//! Two heuristics deepen the search as the position simplifies: one by the
//! number of legal moves, one by remaining material. The caller picks which
//! to use through [`DepthPolicy`].

use std::fmt;
use std::str::FromStr;

use gambit_core::{Color, Position};

use crate::error::ConfigError;
use crate::eval::phase_score;

/// Depth from the legal move count: fewer moves, deeper search.
pub fn depth_by_move_count(legal_moves: usize) -> u8 {
    match legal_moves {
        40.. => 4,
        25.. => 5,
        15.. => 6,
        4.. => 7,
        _ => 8,
    }
}

/// Move-count depth plus up to three plies as material comes off, clamped to `5..=8`.
pub fn depth_combined(position: &Position, side: Color) -> u8 {
    let base = depth_by_move_count(position.legal_moves(side).len());
    let bonus = ((1.0 - phase_score(position)) * 3.0).round() as u8;
    (base + bonus).clamp(5, 8)
}

/// Depth from the number of pieces on the board, kings included.
pub fn depth_by_piece_count(position: &Position) -> u8 {
    match position.board().piece_count() {
        26.. => 5,
        18.. => 6,
        10.. => 7,
        7.. => 8,
        _ => 9,
    }
}

/// How the engine chooses its search depth each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthPolicy {
    /// Always search this many plies.
    Fixed(u8),
    /// [`depth_by_move_count`].
    ByMoveCount,
    /// [`depth_combined`].
    #[default]
    Combined,
    /// [`depth_by_piece_count`].
    ByPieceCount,
}

impl DepthPolicy {
    /// Depth to search for `side` in `position`.
    pub fn resolve(self, position: &Position, side: Color) -> u8 {
        match self {
            DepthPolicy::Fixed(depth) => depth,
            DepthPolicy::ByMoveCount => depth_by_move_count(position.legal_moves(side).len()),
            DepthPolicy::Combined => depth_combined(position, side),
            DepthPolicy::ByPieceCount => depth_by_piece_count(position),
        }
    }
}

impl FromStr for DepthPolicy {
    type Err = ConfigError;

    /// Accepts `auto`, `moves`, `pieces`, or a positive ply count.
    fn from_str(s: &str) -> Result<DepthPolicy, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DepthPolicy::Combined),
            "moves" => Ok(DepthPolicy::ByMoveCount),
            "pieces" => Ok(DepthPolicy::ByPieceCount),
            other => match other.parse::<u8>() {
                Ok(depth) if depth > 0 => Ok(DepthPolicy::Fixed(depth)),
                _ => Err(ConfigError::InvalidDepth {
                    value: s.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for DepthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthPolicy::Fixed(depth) => write!(f, "{depth}"),
            DepthPolicy::ByMoveCount => write!(f, "moves"),
            DepthPolicy::Combined => write!(f, "auto"),
            DepthPolicy::ByPieceCount => write!(f, "pieces"),
        }
    }
}
