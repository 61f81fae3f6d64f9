//! Board validation logic

use std::collections::HashSet;

use super::board::{Board, Player};

impl Board {
    /// Check the alternating-turn invariant: O never has more marks than X,
    /// and X is at most one mark ahead.
    pub fn is_valid(&self) -> bool {
        Self::counts_alternate(&self.count_pieces())
    }

    /// Every board reachable from the empty board by legal alternating play
    /// (X first, play stops at a win or a full board).
    pub fn reachable_positions() -> Vec<Board> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![(Board::new(), Player::X)];

        while let Some((board, to_move)) = stack.pop() {
            if !seen.insert(board) {
                continue;
            }
            order.push(board);

            if board.is_game_over() {
                continue;
            }
            for mv in board.available_moves() {
                stack.push((board.apply_move(mv, to_move), to_move.opponent()));
            }
        }

        order
    }
}

/// Check a caller-supplied grid: exactly 3x3, only `"X"`, `"O"` or `""`, and
/// piece counts consistent with X moving first. Never fails; see
/// [`Board::from_grid`] for the reason a grid is rejected.
pub fn is_valid_board<R, S>(rows: &[R]) -> bool
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    Board::from_grid(rows).is_ok()
}
