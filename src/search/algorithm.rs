//! Algorithm and difficulty selection

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which search procedure picks the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Minimax,
    AlphaBeta,
    DepthLimited,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::DepthLimited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha_beta",
            Algorithm::DepthLimited => "depth_limited",
        }
    }

    /// Parse a caller-supplied name, falling back to [`Algorithm::Minimax`]
    /// for anything unrecognised.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse::<Self>().unwrap_or_else(|err| {
            warn!(%err, "falling back to minimax");
            Algorithm::default()
        })
    }

    /// Human-readable description of the algorithm
    pub fn info(&self) -> AlgorithmInfo {
        let (description, complexity, best_for) = match self {
            Algorithm::Minimax => (
                "Classic minimax algorithm with full game tree exploration",
                "O(b^d)",
                "Learning fundamentals and guaranteed optimal play",
            ),
            Algorithm::AlphaBeta => (
                "Optimized minimax with alpha-beta pruning",
                "O(b^(d/2)) best case",
                "Faster optimal play with pruning demonstration",
            ),
            Algorithm::DepthLimited => (
                "Minimax with configurable depth limits",
                "O(b^d) where d is limited",
                "Performance control and difficulty adjustment",
            ),
        };

        AlgorithmInfo {
            name: self.as_str().to_string(),
            description: description.to_string(),
            complexity: complexity.to_string(),
            best_for: best_for.to_string(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha_beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            "depth_limited" => Ok(Algorithm::DepthLimited),
            _ => Err(crate::Error::UnknownAlgorithm {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How hard the engine tries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a caller-supplied name, falling back to [`Difficulty::Medium`]
    /// for anything unrecognised.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse::<Self>().unwrap_or_else(|err| {
            warn!(%err, "falling back to medium difficulty");
            Difficulty::default()
        })
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::UnknownDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalogue entry describing an algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    pub complexity: String,
    pub best_for: String,
}
