//! Search tuning parameters.

use crate::eval::Score;
use crate::eval::material::piece_value;
use gambit_core::PieceKind;

/// Tuning knobs for [`Searcher`](super::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Score returned for a second occurrence inside minimax.
    pub minimax_repetition_penalty: Score,
    /// Score returned for a second occurrence inside quiescence.
    pub quiescence_repetition_penalty: Score,
    /// Capture plies allowed past the horizon before stand-pat is final.
    pub quiescence_ceiling: u8,
    /// Margin added to the best capture when deciding to delta-prune.
    pub delta_margin: Score,
    /// Enable delta pruning in quiescence.
    pub delta_pruning: bool,
    /// Enable alpha-beta cutoffs in minimax. With this off every child gets a
    /// full window and every move is searched.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimax_repetition_penalty: 5_000,
            quiescence_repetition_penalty: 500,
            quiescence_ceiling: 10,
            delta_margin: piece_value(PieceKind::Queen),
            delta_pruning: true,
            alpha_beta: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;

    #[test]
    fn quiescence_penalty_is_smaller() {
        let config = SearchConfig::default();
        assert!(config.quiescence_repetition_penalty < config.minimax_repetition_penalty);
        assert_eq!(config.delta_margin, 900);
        assert_eq!(config.quiescence_ceiling, 10);
    }
}
