//! Error types for the advisor crate

use thiserror::Error;

use crate::tictactoe::GameOutcome;

/// Main error type for the advisor crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no available moves on the board")]
    NoMovesAvailable,

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("game is already over ({outcome})")]
    GameOver { outcome: GameOutcome },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("unknown algorithm '{input}'. Expected one of: minimax, alpha_beta, depth_limited")]
    UnknownAlgorithm { input: String },

    #[error("unknown difficulty '{input}'. Expected one of: easy, medium, hard")]
    UnknownDifficulty { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
