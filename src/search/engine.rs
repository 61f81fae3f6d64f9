//! Top-level move selection

use tracing::{debug, instrument};

use super::{
    algorithm::{Algorithm, Difficulty},
    alpha_beta::alpha_beta,
    evaluation::{INFINITY, Score},
    minimax::{depth_limited, minimax},
    random::{RandomSource, SeededSource},
    stats::{Analysis, SearchStats},
};
use crate::{
    config::EngineConfig,
    error::{Error, Result},
    tictactoe::{Board, Move},
};

pub const REASON_SINGLE_MOVE: &str = "Only one move available";
pub const REASON_FALLBACK: &str = "Fallback to first available move";
pub const REASON_RANDOM: &str = "Random move for easy difficulty";

/// Chooses moves for the AI mark.
///
/// The engine only holds immutable configuration; every call to
/// [`SearchEngine::get_best_move`] runs on its own [`SearchStats`], so one
/// engine can serve any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration does not
    /// validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A random source seeded from the configuration
    pub fn random_source(&self) -> SeededSource {
        SeededSource::new(self.config.seed)
    }

    /// The explicit override if given, otherwise the policy depth for `difficulty`
    pub fn search_depth(&self, difficulty: Difficulty, max_depth: Option<usize>) -> usize {
        max_depth.unwrap_or_else(|| self.config.depth_policy.depth_for(difficulty))
    }

    /// Pick a move for the AI on `board` using the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`] if the board is full.
    pub fn best_move<R>(&self, board: &Board, rng: &mut R) -> Result<(Move, Analysis)>
    where
        R: RandomSource + ?Sized,
    {
        self.get_best_move(
            board,
            self.config.algorithm,
            self.config.difficulty,
            self.config.max_depth,
            rng,
        )
    }

    /// Pick a move for the AI (O) on `board` and explain how it was found.
    ///
    /// The search depth is `max_depth` when given, otherwise the difficulty's
    /// policy depth. A board with a single empty cell is answered without
    /// searching. On easy difficulty the searched move is replaced, with the
    /// configured probability, by a uniformly random empty cell drawn from
    /// `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`] if the board has no empty cell.
    #[instrument(skip(self, board, rng), fields(board = %board.encode()))]
    pub fn get_best_move<R>(
        &self,
        board: &Board,
        algorithm: Algorithm,
        difficulty: Difficulty,
        max_depth: Option<usize>,
        rng: &mut R,
    ) -> Result<(Move, Analysis)>
    where
        R: RandomSource + ?Sized,
    {
        let mut stats = SearchStats::new();
        let depth = self.search_depth(difficulty, max_depth);

        let available = board.available_moves();
        let Some(&first) = available.first() else {
            return Err(Error::NoMovesAvailable);
        };

        if available.len() == 1 {
            return Ok((first.with_score(0), stats.snapshot(REASON_SINGLE_MOVE, 0)));
        }

        let (found, mut score, mut reasoning) = run_algorithm(board, algorithm, depth, &mut stats);
        let mut chosen = match found {
            Some(mv) => mv,
            None => {
                score = 0;
                reasoning = REASON_FALLBACK.to_string();
                first.with_score(0)
            }
        };

        debug!(
            nodes = stats.nodes_explored,
            pruned = stats.pruned_branches,
            depth_reached = stats.max_depth_reached,
            score,
            chosen = %chosen,
            "search finished"
        );

        if difficulty == Difficulty::Easy && rng.chance(self.config.easy_random_chance) {
            let index = rng.pick(available.len()).min(available.len() - 1);
            chosen = available[index];
            reasoning = REASON_RANDOM.to_string();
            debug!(chosen = %chosen, "easy difficulty substituted a random move");
        }

        Ok((chosen, stats.snapshot(reasoning, score)))
    }
}

/// Run `algorithm` from the root with the AI maximizing
fn run_algorithm(
    board: &Board,
    algorithm: Algorithm,
    depth: usize,
    stats: &mut SearchStats,
) -> (Option<Move>, Score, String) {
    match algorithm {
        Algorithm::Minimax => {
            let (mv, score) = minimax(board, 0, true, depth, stats);
            (mv, score, "Classic minimax algorithm".to_string())
        }
        Algorithm::AlphaBeta => {
            let (mv, score) = alpha_beta(board, 0, -INFINITY, INFINITY, true, depth, stats);
            let reasoning = format!(
                "Alpha-beta pruning found best move (pruned {} branches)",
                stats.pruned_branches
            );
            (mv, score, reasoning)
        }
        Algorithm::DepthLimited => {
            let (mv, score) = depth_limited(board, depth, stats);
            (mv, score, format!("Depth-limited search to depth {depth}"))
        }
    }
}
