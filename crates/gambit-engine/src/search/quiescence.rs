//! Capture-only search past the horizon.

use gambit_core::{Color, MoveList, Position};
use tracing::trace;

use crate::eval::material::piece_value;
use crate::eval::{MATE_THRESHOLD, Score, evaluate};
use crate::search::Searcher;
use crate::search::ordering::order_moves;

/// Score adjustment per ply that makes nearer mates score higher.
const MATE_PLY_BIAS: Score = 10;

impl Searcher {
    /// Quiescence search from `position` with `side` to move.
    ///
    /// `qdepth` counts capture plies since the horizon; at the configured
    /// ceiling the stand-pat score is final.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn quiescence(
        &mut self,
        position: &mut Position,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        side: Color,
        ply: u32,
        qdepth: u8,
    ) -> Score {
        self.nodes += 1;

        if let Some(score) = self.repetition_score(
            position,
            side,
            maximizing,
            self.config.quiescence_repetition_penalty,
        ) {
            return score;
        }

        let mut stand_pat = evaluate(position, side);
        if stand_pat >= MATE_THRESHOLD {
            stand_pat -= MATE_PLY_BIAS * ply as Score;
        } else if stand_pat <= -MATE_THRESHOLD {
            stand_pat += MATE_PLY_BIAS * ply as Score;
        }

        if qdepth >= self.config.quiescence_ceiling {
            trace!(ply, stand_pat, "quiescence ceiling");
            return stand_pat;
        }

        if maximizing {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return stand_pat;
            }
            beta = beta.min(stand_pat);
        }

        let mut captures = capture_moves(position, side);
        if captures.is_empty() {
            return stand_pat;
        }
        order_moves(position.board(), &mut captures);

        if self.config.delta_pruning {
            let best_gain = captures
                .as_slice()
                .iter()
                .filter_map(|mv| position.piece_on(mv.to()))
                .map(|victim| piece_value(victim.kind))
                .max()
                .unwrap_or(0);
            let margin = best_gain + self.config.delta_margin;
            if maximizing && stand_pat + margin < alpha {
                return alpha;
            }
            if !maximizing && stand_pat - margin > beta {
                return beta;
            }
        }

        for &mv in captures.as_slice() {
            let score = {
                let mut child = position.apply_scoped(mv);
                self.quiescence(&mut child, alpha, beta, !maximizing, !side, ply + 1, qdepth + 1)
            };
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        if maximizing { alpha } else { beta }
    }
}

/// Legal moves of `side` that land on an enemy piece.
fn capture_moves(position: &Position, side: Color) -> MoveList {
    let mut moves = position.legal_moves(side);
    moves.retain(|mv| position.cell(mv.to()).holds(!side));
    moves
}
