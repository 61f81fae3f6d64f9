//! Exhaustive and depth-limited minimax

use super::{
    evaluation::{AI_PLAYER, HUMAN_PLAYER, Score, evaluate},
    stats::SearchStats,
};
use crate::tictactoe::{Board, Move};

/// Classic minimax over the game tree rooted at `board`.
///
/// The maximizing side places the AI mark, the minimizing side the human
/// mark. Search stops at terminal boards or once `depth >= max_depth`, where
/// the board is scored with [`evaluate`]. Moves are tried in scan order and
/// only a strictly better score replaces the current best, so the first of
/// several equally good moves is kept.
///
/// Returns the best move (with its score attached) and the score, or `None`
/// when the root itself is a leaf.
pub fn minimax(
    board: &Board,
    depth: usize,
    maximizing: bool,
    max_depth: usize,
    stats: &mut SearchStats,
) -> (Option<Move>, Score) {
    stats.visit(depth);

    if board.is_game_over() || depth >= max_depth {
        return (None, evaluate(board, depth));
    }

    let (player, mut best_score) = if maximizing {
        (AI_PLAYER, Score::MIN)
    } else {
        (HUMAN_PLAYER, Score::MAX)
    };
    let mut best_move = None;

    for mv in board.available_moves() {
        let child = board.apply_move(mv, player);
        let (_, score) = minimax(&child, depth + 1, !maximizing, max_depth, stats);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv.with_score(score));
        }
    }

    (best_move, best_score)
}

/// Minimax from the root with the AI to move, cut off at `max_depth` plies.
pub fn depth_limited(
    board: &Board,
    max_depth: usize,
    stats: &mut SearchStats,
) -> (Option<Move>, Score) {
    minimax(board, 0, true, max_depth, stats)
}
