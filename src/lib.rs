//! Tic-Tac-Toe move advisor
//!
//! This crate provides:
//! - Board rules: validity, winner and draw detection, move enumeration
//! - Game-tree search: minimax, alpha-beta pruning and depth-limited minimax
//!   with per-search statistics
//! - Difficulty handling, including the injectable randomness used on easy
//! - A request/response advisor and a command-line front end

pub mod advisor;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use advisor::{AdviceRequest, Advisor, MoveAdvice};
pub use config::{DepthPolicy, EngineConfig};
pub use error::{Error, Result};
pub use search::{Algorithm, Analysis, Difficulty, SearchEngine};
pub use tictactoe::{Board, Move, Player, is_valid_board};
