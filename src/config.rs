//! Engine configuration
//!
//! The difficulty→depth policy and the per-engine defaults live here as plain
//! data, loadable from JSON so a deployment can retune them without a rebuild.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    search::{Algorithm, Difficulty},
};

/// Deepest meaningful search on a 3x3 board
pub const MAX_SEARCH_DEPTH: usize = 9;

/// Probability that easy difficulty replaces the searched move with a random one
pub const DEFAULT_EASY_RANDOM_CHANCE: f64 = 0.3;

/// Search depth for each difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthPolicy {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DepthPolicy {
    pub fn depth_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            easy: 3,
            medium: 6,
            hard: MAX_SEARCH_DEPTH,
        }
    }
}

/// Configuration for a [`crate::search::SearchEngine`].
///
/// # Examples
///
/// ```
/// use advisor::config::EngineConfig;
/// use advisor::search::{Algorithm, Difficulty};
///
/// let config = EngineConfig::default()
///     .with_algorithm(Algorithm::AlphaBeta)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm used when a request does not name one
    pub algorithm: Algorithm,
    /// Difficulty used when a request does not name one
    pub difficulty: Difficulty,
    /// Depth override applied when a request does not give one
    pub max_depth: Option<usize>,
    pub depth_policy: DepthPolicy,
    pub easy_random_chance: f64,
    /// Seed for the easy-difficulty random source
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_depth_policy(mut self, policy: DepthPolicy) -> Self {
        self.depth_policy = policy;
        self
    }

    pub fn with_easy_random_chance(mut self, chance: f64) -> Self {
        self.easy_random_chance = chance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the policy is ordered and the remaining values are in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |message: String| -> Result<()> { Err(Error::InvalidConfiguration { message }) };
        let DepthPolicy { easy, medium, hard } = self.depth_policy;

        if easy == 0 || hard > MAX_SEARCH_DEPTH {
            return invalid(format!(
                "depth policy must stay within 1..={MAX_SEARCH_DEPTH} (easy={easy}, hard={hard})"
            ));
        }
        if !(easy <= medium && medium <= hard) {
            return invalid(format!(
                "depth policy must satisfy easy <= medium <= hard (got {easy}, {medium}, {hard})"
            ));
        }
        if let Some(depth) = self
            .max_depth
            .filter(|depth| !(1..=MAX_SEARCH_DEPTH).contains(depth))
        {
            return invalid(format!(
                "max_depth must be within 1..={MAX_SEARCH_DEPTH} (got {depth})"
            ));
        }
        if !(0.0..=1.0).contains(&self.easy_random_chance) {
            return invalid(format!(
                "easy_random_chance {} must be within [0, 1]",
                self.easy_random_chance
            ));
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file. Missing fields take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::Serialization`] if it is not valid JSON for this type, or
    /// [`Error::InvalidConfiguration`] if validation fails.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            difficulty: Difficulty::default(),
            max_depth: None,
            depth_policy: DepthPolicy::default(),
            easy_random_chance: DEFAULT_EASY_RANDOM_CHANCE,
            seed: None,
        }
    }
}
