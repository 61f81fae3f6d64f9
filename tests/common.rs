//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use advisor::{Board, search::RandomSource};

/// Parse a board string, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Turn `[["X", "", ""], ...]` into the owned grid the advisor expects.
pub fn grid(rows: [[&str; 3]; 3]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

/// Random source that replays scripted decisions.
///
/// Once a script runs out, `chance` answers `false` and `pick` answers `0`.
#[derive(Debug, Default)]
pub struct Scripted {
    chances: VecDeque<bool>,
    picks: VecDeque<usize>,
    pub chance_calls: usize,
    pub pick_calls: usize,
}

impl Scripted {
    pub fn new(chances: &[bool], picks: &[usize]) -> Self {
        Self {
            chances: chances.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Always keep the searched move.
    pub fn keep() -> Self {
        Self::new(&[], &[])
    }

    /// Substitute once, choosing the `index`-th available move.
    pub fn substitute(index: usize) -> Self {
        Self::new(&[true], &[index])
    }
}

impl RandomSource for Scripted {
    fn chance(&mut self, _probability: f64) -> bool {
        self.chance_calls += 1;
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick_calls += 1;
        self.picks.pop_front().unwrap_or(0).min(len - 1)
    }
}
