//! Request/response move advisory
//!
//! Takes a caller's raw grid and algorithm/difficulty names, refuses boards
//! that are malformed or already finished, asks the [`SearchEngine`] for a
//! move and reports how the game stands once the AI has played it.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    search::{
        AI_PLAYER, Algorithm, AlgorithmInfo, Analysis, Difficulty, RandomSource, Score,
        SearchEngine,
    },
    tictactoe::{Board, GameOutcome, Move},
};

/// A move request as a caller would send it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// 3x3 grid of `"X"`, `"O"` or `""`
    pub board: Vec<Vec<String>>,
    /// Algorithm name; unknown names fall back to minimax
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Difficulty name; unknown names fall back to medium
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl AdviceRequest {
    pub fn new(board: Vec<Vec<String>>) -> Self {
        Self {
            board,
            algorithm: None,
            difficulty: None,
            max_depth: None,
        }
    }

    /// Request advice for an already-parsed board
    pub fn for_board(board: &Board) -> Self {
        let grid = board
            .to_grid()
            .iter()
            .map(|row| row.iter().map(|mark| mark.to_string()).collect())
            .collect();
        Self::new(grid)
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// The engine's answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveAdvice {
    #[serde(rename = "move")]
    pub mv: Move,
    pub evaluation: Score,
    pub algorithm: Algorithm,
    pub difficulty: Difficulty,
    pub analysis: Analysis,
    /// Board after the AI's move
    pub board: Board,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
}

/// Front door to the engine for untrusted requests
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    engine: SearchEngine,
}

impl Advisor {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Catalogue of the available algorithms
    pub fn algorithms(&self) -> Vec<AlgorithmInfo> {
        Algorithm::ALL.iter().map(Algorithm::info).collect()
    }

    /// Validate `request`, pick the AI's move and report the resulting position.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBoard`] if the grid is not a legal 3x3 board
    /// - [`Error::GameOver`] if the board already has a winner or is full
    #[instrument(skip(self, request, rng))]
    pub fn advise<R>(&self, request: &AdviceRequest, rng: &mut R) -> Result<MoveAdvice>
    where
        R: RandomSource + ?Sized,
    {
        let board = Board::from_grid(&request.board).map_err(|err| match err {
            Error::InvalidBoard { .. } => err,
            other => Error::InvalidBoard {
                reason: other.to_string(),
            },
        })?;

        let defaults = self.engine.config();
        let algorithm = request
            .algorithm
            .as_deref()
            .map_or(defaults.algorithm, Algorithm::from_name_lossy);
        let difficulty = request
            .difficulty
            .as_deref()
            .map_or(defaults.difficulty, Difficulty::from_name_lossy);
        let max_depth = request.max_depth.or(defaults.max_depth);

        self.advise_board(&board, algorithm, difficulty, max_depth, rng)
    }

    /// Same as [`Advisor::advise`] for a board that has already been parsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board already has a winner or is full.
    pub fn advise_board<R>(
        &self,
        board: &Board,
        algorithm: Algorithm,
        difficulty: Difficulty,
        max_depth: Option<usize>,
        rng: &mut R,
    ) -> Result<MoveAdvice>
    where
        R: RandomSource + ?Sized,
    {
        if let Some(outcome) = board.status().outcome {
            return Err(Error::GameOver { outcome });
        }

        let (mv, analysis) = self
            .engine
            .get_best_move(board, algorithm, difficulty, max_depth, rng)?;

        let after = board.apply_move(mv, AI_PLAYER).status();
        debug!(
            chosen = %mv,
            score = analysis.evaluation_score,
            nodes = analysis.nodes_explored,
            "advised move"
        );

        Ok(MoveAdvice {
            mv,
            evaluation: analysis.evaluation_score,
            algorithm,
            difficulty,
            analysis,
            board: after.board,
            game_over: after.is_over(),
            outcome: after.outcome,
        })
    }
}
