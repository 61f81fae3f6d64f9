//! Tic-Tac-Toe board rules

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Player};
pub use game::{GameOutcome, GameStatus, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use validation::is_valid_board;
