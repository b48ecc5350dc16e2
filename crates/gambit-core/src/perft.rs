//! Perft (performance test) for move generation correctness verification.
//!
//! Counts match standard tables only for positions and depths where en
//! passant and under-promotion cannot occur, since this game has neither.

use crate::board::Board;
use crate::color::Color;

/// Count the number of leaf nodes at the given depth with `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them.
pub fn perft(board: &mut Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in moves.as_slice() {
        let snapshot = board.apply(mv);
        nodes += perft(board, !side, depth - 1);
        board.undo(mv, snapshot);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = board.legal_moves(side);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let snapshot = board.apply(mv);
            let count = if depth <= 1 { 1 } else { perft(board, !side, depth - 1) };
            board.undo(mv, snapshot);
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 2), 400);
    }

    #[test]
    fn perft_leaves_board_unchanged() {
        let mut board = Board::starting_position();
        let before = board;
        perft(&mut board, Color::White, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let parts = divide(&mut board, Color::White, 2);
        assert_eq!(parts.len(), 20);
        assert_eq!(parts.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(parts.iter().all(|(_, n)| *n == 20));
        assert_eq!(parts[0].0, "a2a3");
    }
}
