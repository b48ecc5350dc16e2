//! Minimax with alpha-beta pruning.

use gambit_core::{Color, Move, Position};
use tracing::trace;

use crate::eval::Score;
use crate::search::Searcher;
use crate::search::ordering::order_moves;

/// Score representing an unreachable upper/lower bound.
pub const INF: Score = 1_000_000_000_000;

impl Searcher {
    /// Minimax search from `position` with `side` to move.
    ///
    /// White maximizes. Returns the best score and, when any move was
    /// searched, the move that achieved it. Repetition checks are skipped at
    /// the root so a repeated position still gets a real move.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        side: Color,
        ply: u32,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;

        if ply > 0
            && let Some(score) = self.repetition_score(
                position,
                side,
                maximizing,
                self.config.minimax_repetition_penalty,
            )
        {
            return (score, None);
        }

        if depth == 0 || !position.has_legal_move(side) {
            let score = self.quiescence(position, alpha, beta, maximizing, side, ply, 0);
            return (score, None);
        }

        let mut moves = position.legal_moves(side);
        order_moves(position.board(), &mut moves);

        // Don't waste a tempo undoing our own last move, unless it is the only move.
        let skip = match (ply, moves.len()) {
            (0, n) if n > 1 => position.last_move(side).map(Move::reversed),
            _ => None,
        };

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for &mv in moves.as_slice() {
            if Some(mv) == skip {
                continue;
            }
            let (child_alpha, child_beta) = if self.config.alpha_beta {
                (alpha, beta)
            } else {
                (-INF, INF)
            };
            let (score, _) = {
                let mut child = position.apply_scoped(mv);
                self.minimax(&mut child, depth - 1, child_alpha, child_beta, !maximizing, !side, ply + 1)
            };
            if ply == 0 {
                trace!(%mv, score, "root move");
            }

            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }
            if self.config.alpha_beta && beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }

    /// Score for a repeated position, if the repetition rules apply.
    ///
    /// A third occurrence is a draw. A second occurrence returns `penalty`,
    /// signed in favor of the side to move so the side that just repeated
    /// is discouraged.
    pub(super) fn repetition_score(
        &self,
        position: &Position,
        side: Color,
        maximizing: bool,
        penalty: Score,
    ) -> Option<Score> {
        match position.repetition_count(side) {
            n if n >= 3 => Some(0),
            2 => Some(if maximizing { penalty } else { -penalty }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use gambit_core::{Color, Move, Position, Square};

    use super::INF;
    use crate::search::Searcher;

    #[test]
    fn depth_one_returns_legal_move() {
        let mut position = Position::initialize_standard();
        let mut searcher = Searcher::new();
        let (_, best) = searcher.minimax(&mut position, 1, -INF, INF, true, Color::White, 0);
        let best = best.unwrap();
        assert!(position.legal_moves(Color::White).contains(best));
    }

    #[test]
    fn takes_free_queen() {
        let (mut position, side) =
            Position::from_fen("4k3/8/8/8/q7/8/8/R3K3 w - - 0 1").unwrap();
        let mut searcher = Searcher::new();
        let (score, best) = searcher.minimax(&mut position, 2, -INF, INF, true, side, 0);
        assert_eq!(best, Some(Move::new(Square::A1, Square::A4)));
        assert!(score >= 400, "score {score}");
    }

    #[test]
    fn black_minimizes() {
        let (mut position, side) =
            Position::from_fen("7k/8/8/8/Q6r/8/8/4K3 b - - 0 1").unwrap();
        let mut searcher = Searcher::new();
        let (score, best) = searcher.minimax(&mut position, 2, -INF, INF, false, side, 0);
        assert_eq!(best, Some(Move::new(Square::H4, Square::A4)));
        assert!(score <= -400, "score {score}");
    }

    #[test]
    fn root_skips_reversing_last_move() {
        let mut position = Position::initialize_standard();
        for m in ["g1f3", "g8f6"] {
            position
                .apply_move_and_record_history(Move::from_coordinates(m).unwrap())
                .unwrap();
        }
        let mut searcher = Searcher::new();
        let (_, best) = searcher.minimax(&mut position, 1, -INF, INF, true, Color::White, 0);
        assert_ne!(best, Some(Move::new(Square::F3, Square::G1)));
    }

    #[test]
    fn repetition_penalty_sign() {
        let mut position = Position::initialize_standard();
        position.record_position(Color::White);
        position.record_position(Color::White);
        let searcher = Searcher::new();
        let penalty = 5_000;
        assert_eq!(
            searcher.repetition_score(&position, Color::White, true, penalty),
            Some(penalty)
        );
        assert_eq!(
            searcher.repetition_score(&position, Color::White, false, penalty),
            Some(-penalty)
        );
        position.record_position(Color::White);
        assert_eq!(
            searcher.repetition_score(&position, Color::White, true, penalty),
            Some(0)
        );
        assert_eq!(
            searcher.repetition_score(&position, Color::Black, true, penalty),
            None
        );
    }
}
