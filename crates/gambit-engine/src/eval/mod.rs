//! Static evaluation.
//!
//! Scores are from White's perspective: positive favors White.

pub mod material;
pub mod phase;

use gambit_core::{Color, Position};

pub use material::material;
pub use phase::phase_score;

/// Evaluation score. Wide enough to hold mate scores with room for ply bias.
pub type Score = i64;

/// Score for a checkmated side.
pub const MATE_SCORE: Score = 10_000_000_000;

/// Scores at or beyond this magnitude indicate a mate on the board.
pub const MATE_THRESHOLD: Score = MATE_SCORE / 2;

/// Bonus for giving check.
pub const CHECK_BONUS: Score = 50;

/// Evaluate `position` with `side` to move.
///
/// A threefold repetition is a draw and scores 0. Otherwise the score is the
/// material balance, adjusted by [`CHECK_BONUS`] for a side in check and by
/// [`MATE_SCORE`] for a side that is checkmated.
pub fn evaluate(position: &Position, side: Color) -> Score {
    if position.is_threefold(side) {
        return 0;
    }

    let mut score = material(position.board());

    if position.is_in_check(Color::Black) {
        score += CHECK_BONUS;
    }
    if position.is_in_check(Color::White) {
        score -= CHECK_BONUS;
    }

    if position.is_checkmate(Color::Black) {
        score += MATE_SCORE;
    }
    if position.is_checkmate(Color::White) {
        score -= MATE_SCORE;
    }

    score
}
