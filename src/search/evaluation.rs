//! Position evaluation shared by every search algorithm

use crate::tictactoe::{Board, Cell, Player};

/// Evaluation score type. Positive favours the AI.
pub type Score = i32;

/// The mark the engine plays; always the maximizing side.
pub const AI_PLAYER: Player = Player::O;
/// The mark the engine plays against; always the minimizing side.
pub const HUMAN_PLAYER: Player = Player::X;

pub const WIN_SCORE: Score = 100;
pub const LOSE_SCORE: Score = -100;
pub const DRAW_SCORE: Score = 0;

/// Alpha-beta window bound
pub const INFINITY: Score = Score::MAX;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const CENTER_WEIGHT: Score = 3;
const CORNER_WEIGHT: Score = 2;

/// Score a board reached `depth` plies below the search root.
///
/// Terminal boards score `100 - depth` for an AI win (sooner is better),
/// `-100 + depth` for an AI loss (later is better) and `0` for a draw.
/// Anything else falls through to [`positional_value`], which only matters
/// when the search stops at its depth limit before the game ends.
pub fn evaluate(board: &Board, depth: usize) -> Score {
    let depth = depth as Score;
    match board.winner() {
        Some(AI_PLAYER) => WIN_SCORE - depth,
        Some(HUMAN_PLAYER) => LOSE_SCORE + depth,
        _ if board.is_draw() => DRAW_SCORE,
        _ => positional_value(board),
    }
}

/// Static heuristic for unfinished boards: center ±3, each corner ±2.
pub fn positional_value(board: &Board) -> Score {
    let weigh = |idx: usize, weight: Score| match board.cells[idx] {
        Cell::Empty => 0,
        cell if cell == AI_PLAYER.to_cell() => weight,
        _ => -weight,
    };

    weigh(CENTER, CENTER_WEIGHT)
        + CORNERS
            .iter()
            .map(|&idx| weigh(idx, CORNER_WEIGHT))
            .sum::<Score>()
}
