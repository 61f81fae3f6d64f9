//! Per-search statistics and the analysis snapshot handed to callers

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::evaluation::Score;

/// Mutable accumulator for one top-level search.
///
/// Created fresh for every call, borrowed mutably by each recursive step,
/// and frozen into an [`Analysis`] when the call returns.
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub nodes_explored: u64,
    /// Number of alpha-beta cutoff events (not the number of skipped moves)
    pub pruned_branches: u64,
    pub max_depth_reached: usize,
    started: Instant,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            nodes_explored: 0,
            pruned_branches: 0,
            max_depth_reached: 0,
            started: Instant::now(),
        }
    }

    /// Record a visit to a node `depth` plies below the root
    pub(crate) fn visit(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    pub(crate) fn record_cutoff(&mut self) {
        self.pruned_branches += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Freeze the counters into an [`Analysis`]
    pub fn snapshot(&self, move_reasoning: impl Into<String>, evaluation_score: Score) -> Analysis {
        Analysis {
            nodes_explored: self.nodes_explored,
            pruned_branches: self.pruned_branches,
            max_depth_reached: self.max_depth_reached,
            thinking_time: self.elapsed().as_secs_f64(),
            move_reasoning: move_reasoning.into(),
            evaluation_score,
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

/// How a move was chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub nodes_explored: u64,
    pub pruned_branches: u64,
    pub max_depth_reached: usize,
    /// Wall-clock seconds spent in the call
    pub thinking_time: f64,
    pub move_reasoning: String,
    pub evaluation_score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_tracks_deepest_node() {
        let mut stats = SearchStats::new();
        stats.visit(0);
        stats.visit(3);
        stats.visit(1);

        assert_eq!(stats.nodes_explored, 3);
        assert_eq!(stats.max_depth_reached, 3);
    }

    #[test]
    fn test_snapshot_copies_counters() {
        let mut stats = SearchStats::new();
        stats.visit(2);
        stats.record_cutoff();

        let analysis = stats.snapshot("because", 7);
        assert_eq!(analysis.nodes_explored, 1);
        assert_eq!(analysis.pruned_branches, 1);
        assert_eq!(analysis.max_depth_reached, 2);
        assert_eq!(analysis.move_reasoning, "because");
        assert_eq!(analysis.evaluation_score, 7);
        assert!(analysis.thinking_time >= 0.0);
    }
}
