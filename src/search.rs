//! Game-tree search: minimax, alpha-beta and depth-limited variants
//!
//! All three algorithms share [`evaluate`] and the board's terminal checks.
//! Each top-level search owns a fresh [`SearchStats`] that is threaded through
//! the recursion by `&mut` and frozen into an [`Analysis`] on return.

pub mod algorithm;
pub mod alpha_beta;
pub mod engine;
pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod stats;

pub use algorithm::{Algorithm, AlgorithmInfo, Difficulty};
pub use alpha_beta::alpha_beta;
pub use engine::SearchEngine;
pub use evaluation::{AI_PLAYER, HUMAN_PLAYER, INFINITY, Score, evaluate};
pub use minimax::{depth_limited, minimax};
pub use random::{RandomSource, SeededSource};
pub use stats::{Analysis, SearchStats};
