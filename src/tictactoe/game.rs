//! Moves, outcomes and game status

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, Board, Player};

/// A move on the board, optionally carrying the score the search gave it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<i32>,
}

impl Move {
    /// Create an unscored move. Does not check bounds.
    pub fn new(row: usize, col: usize) -> Self {
        Move {
            row,
            col,
            score: None,
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    /// (row, col) without the score
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Row-major cell index (0-8)
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Snapshot of a board: whose turn it is, how it ended, how many moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub board: Board,
    pub current_player: Player,
    pub outcome: Option<GameOutcome>,
    pub move_count: usize,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
