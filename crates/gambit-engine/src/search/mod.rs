//! Game-tree search and the engine-move entry point.

pub mod config;
pub mod minimax;
pub mod ordering;
pub mod quiescence;

use gambit_core::{Color, Move, Piece, Position};
use tracing::debug;

use crate::eval::Score;
use config::SearchConfig;
use minimax::INF;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score from White's perspective.
    pub score: Score,
    /// Nodes visited, quiescence included.
    pub nodes: u64,
    /// Nominal depth searched.
    pub depth: u8,
}

/// What happened on an engine turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The engine played `mv` with `piece`, possibly capturing.
    Moved {
        mv: Move,
        piece: Piece,
        captured: Option<Piece>,
        score: Score,
    },
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

/// Fixed-depth minimax searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `position` to `depth` plies with `side` to move.
    ///
    /// Depth 0 is treated as 1. The position is restored before returning.
    pub fn search(&mut self, position: &mut Position, side: Color, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        let maximizing = side == Color::White;
        let (score, best_move) = self.minimax(position, depth, -INF, INF, maximizing, side, 0);
        let result = SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            depth,
        };
        debug!(
            %side,
            depth,
            score,
            nodes = self.nodes,
            best = ?best_move,
            "search complete"
        );
        result
    }

    /// Pick a move for `side`, play it on `position`, and report the outcome.
    ///
    /// The move goes through the recording path, so repetition history and
    /// the side's last move are updated. Depth 0 is treated as 1.
    pub fn choose_and_apply(&mut self, position: &mut Position, side: Color, depth: u8) -> Outcome {
        let moves = position.legal_moves(side);
        if moves.is_empty() {
            return if position.is_in_check(side) {
                Outcome::Checkmate { winner: !side }
            } else {
                Outcome::Stalemate
            };
        }

        let result = self.search(position, side, depth);
        let mv = result.best_move.unwrap_or(moves[0]);
        let Some(piece) = position.piece_on(mv.from()) else {
            return Outcome::Stalemate;
        };
        let Ok(captured) = position.apply_move_and_record_history(mv) else {
            return Outcome::Stalemate;
        };

        Outcome::Moved {
            mv,
            piece,
            captured,
            score: result.score,
        }
    }
}

/// Choose and play a move for `side` with default search settings.
pub fn choose_and_apply_engine_move(position: &mut Position, side: Color, depth: u8) -> Outcome {
    Searcher::new().choose_and_apply(position, side, depth)
}

#[cfg(test)]
mod tests {
    use gambit_core::{Color, Move, Piece, Position, Square};

    use super::*;
    use crate::eval::{CHECK_BONUS, MATE_SCORE, MATE_THRESHOLD};

    #[test]
    fn search_restores_position() {
        let mut position = Position::initialize_standard();
        let before = *position.board();
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut position, Color::White, 2);
        assert_eq!(*position.board(), before);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(result.nodes, searcher.nodes());
    }

    #[test]
    fn finds_mate_in_one() {
        // Scholar's mate: Qxf7#.
        let (mut position, side) = Position::from_fen(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        )
        .unwrap();
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut position, side, 1);
        assert_eq!(result.best_move, Some(Move::new(Square::H5, Square::F7)));
        assert!(
            result.score > MATE_THRESHOLD,
            "score {} should indicate mate",
            result.score
        );
    }

    #[test]
    fn mate_score_carries_material_and_distance() {
        // Back-rank mate: Ra8#, found at ply 1 of a 3-ply search.
        let (mut position, side) =
            Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut position, side, 3);
        assert_eq!(result.best_move, Some(Move::new(Square::A1, Square::A8)));
        assert_eq!(result.score, MATE_SCORE + 500 + CHECK_BONUS - 10);
    }

    #[test]
    fn outcome_reports_capture() {
        let (mut position, side) =
            Position::from_fen("4k3/8/8/8/q7/8/8/R3K3 w - - 0 1").unwrap();
        let outcome = choose_and_apply_engine_move(&mut position, side, 1);
        match outcome {
            Outcome::Moved {
                mv,
                piece,
                captured,
                ..
            } => {
                assert_eq!(mv, Move::new(Square::A1, Square::A4));
                assert_eq!(piece, Piece::WHITE_ROOK);
                assert_eq!(captured, Some(Piece::BLACK_QUEEN));
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(position.piece_on(Square::A4), Some(Piece::WHITE_ROOK));
        assert_eq!(position.last_move(Color::White), Some(Move::new(Square::A1, Square::A4)));
    }

    #[test]
    fn terminal_outcomes() {
        let (mut mated, _) = Position::from_fen("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            choose_and_apply_engine_move(&mut mated, Color::Black, 2),
            Outcome::Checkmate {
                winner: Color::White
            }
        );
        let (mut stalemated, _) = Position::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            choose_and_apply_engine_move(&mut stalemated, Color::Black, 2),
            Outcome::Stalemate
        );
    }

    #[test]
    fn depth_zero_still_moves() {
        let mut position = Position::initialize_standard();
        let outcome = choose_and_apply_engine_move(&mut position, Color::White, 0);
        assert!(matches!(outcome, Outcome::Moved { .. }));
    }

    #[test]
    fn search_depth_zero_is_one_ply() {
        let mut position = Position::initialize_standard();
        let result = Searcher::new().search(&mut position, Color::White, 0);
        assert_eq!(result.depth, 1);
        assert!(result.best_move.is_some());
    }
}
