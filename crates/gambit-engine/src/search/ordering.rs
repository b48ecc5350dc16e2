//! Move ordering via MVV-LVA (most valuable victim, least valuable attacker).

use std::cmp::Reverse;

use gambit_core::{Board, MoveList, Move, PieceKind};

/// Ordering weights indexed by [`PieceKind::index()`]: P=1, N=3, B=3, R=5, Q=9, K=1000.
const ORDER_WEIGHT: [i32; PieceKind::COUNT] = [1, 3, 3, 5, 9, 1000];

/// Score a move for ordering: `10 * victim - attacker` for captures, 0 otherwise.
pub fn mvv_lva(board: &Board, mv: Move) -> i32 {
    let Some(attacker) = board.piece_on(mv.from()) else {
        return 0;
    };
    match board.piece_on(mv.to()) {
        Some(victim) if victim.color != attacker.color => {
            10 * ORDER_WEIGHT[victim.kind.index()] - ORDER_WEIGHT[attacker.kind.index()]
        }
        _ => 0,
    }
}

/// Sort moves by descending MVV-LVA score. Ties keep no particular order.
pub fn order_moves(board: &Board, moves: &mut MoveList) {
    moves
        .as_mut_slice()
        .sort_unstable_by_key(|&mv| Reverse(mvv_lva(board, mv)));
}

#[cfg(test)]
mod tests {
    use gambit_core::{Board, Move, MoveList, Square};

    use super::{mvv_lva, order_moves};

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap().0
    }

    #[test]
    fn quiet_move_scores_zero() {
        let b = Board::starting_position();
        assert_eq!(mvv_lva(&b, Move::new(Square::E2, Square::E4)), 0);
    }

    #[test]
    fn pawn_takes_queen_beats_queen_takes_pawn() {
        // White pawn d4 can take the queen on e5; white queen h2 can take the pawn on h7.
        let b = board("4k3/7p/8/4q3/3P4/8/7Q/4K3 w - - 0 1");
        let pxq = mvv_lva(&b, Move::new(Square::D4, Square::E5));
        let qxp = mvv_lva(&b, Move::new(Square::H2, Square::H7));
        assert_eq!(pxq, 10 * 9 - 1);
        assert_eq!(qxp, 10 - 9);
        assert!(pxq > qxp);
    }

    #[test]
    fn order_puts_best_capture_first() {
        let b = board("4k3/7p/8/4q3/3P4/8/7Q/4K3 w - - 0 1");
        let mut list = MoveList::new();
        list.push(Move::new(Square::E1, Square::D1));
        list.push(Move::new(Square::H2, Square::H7));
        list.push(Move::new(Square::D4, Square::E5));
        order_moves(&b, &mut list);
        assert_eq!(list[0], Move::new(Square::D4, Square::E5));
        assert_eq!(list[1], Move::new(Square::H2, Square::H7));
        assert_eq!(list[2], Move::new(Square::E1, Square::D1));
    }
}
