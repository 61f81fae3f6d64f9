//! Minimax with alpha-beta pruning

use super::{
    evaluation::{AI_PLAYER, HUMAN_PLAYER, Score, evaluate},
    stats::SearchStats,
};
use crate::tictactoe::{Board, Move};

/// Minimax with an `(alpha, beta)` window.
///
/// Same traversal as [`super::minimax::minimax`], but after each child the
/// maximizer raises `alpha` and the minimizer lowers `beta`; once
/// `beta <= alpha` the remaining siblings cannot change the parent's choice,
/// so the loop stops and one cutoff is recorded. Start with
/// `alpha = -INFINITY, beta = INFINITY`.
///
/// The score always equals plain minimax at the same depth limit. The move can
/// differ when several moves tie.
pub fn alpha_beta(
    board: &Board,
    depth: usize,
    mut alpha: Score,
    mut beta: Score,
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
        let (_, score) = alpha_beta(&child, depth + 1, alpha, beta, !maximizing, max_depth, stats);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv.with_score(score));
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv.with_score(score));
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.record_cutoff();
            break;
        }
    }

    (best_move, best_score)
}
