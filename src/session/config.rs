//! Session configuration.
//!
//! A [`SessionConfig`] names everything a session needs at creation: the
//! move set and how its beats relation is generated, the round and try
//! limits, the starting difficulty, an optional RNG seed and the opponent
//! tunables. It can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "moves": ["rock", "paper", "scissors", "lizard", "spock", "stone"],
//!   "relation": { "kind": "cyclic", "reach": 2, "opposites": "first_listed" },
//!   "rounds_max": 10,
//!   "difficulty": "hard",
//!   "seed": 42
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::opponent::{Difficulty, OpponentConfig};
use crate::rules::{Move, Relation, RuleSet};

/// Configuration for a game session.
///
/// # Example
/// ```
/// use rpsls_arena::opponent::Difficulty;
/// use rpsls_arena::session::SessionConfig;
///
/// let config = SessionConfig::classic()
///     .with_rounds(5)
///     .with_difficulty(Difficulty::Medium)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tries_limit(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Ordered move set.
    pub moves: Vec<Move>,

    /// How the beats relation is generated over `moves`.
    pub relation: Relation,

    /// Number of rounds in a session.
    pub rounds_max: u32,

    /// Number of tries in a session. Defaults to `rounds_max`.
    #[serde(default)]
    pub tries: Option<u32>,

    /// Difficulty at session start.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Random seed for reproducible play.
    ///
    /// If `None`, the session seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Whether `reset()` also restores `difficulty`.
    ///
    /// When false (the default) the difficulty picked during play survives
    /// a restart.
    #[serde(default)]
    pub reset_difficulty: bool,

    /// Tunables of the medium and hard opponents.
    #[serde(default)]
    pub opponent: OpponentConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::extended()
    }
}

impl SessionConfig {
    /// Six moves, each beating the next two (first-listed wins opposites), ten rounds, easy.
    pub fn extended() -> Self {
        Self {
            moves: Move::ALL.to_vec(),
            relation: Relation::extended(),
            rounds_max: 10,
            tries: None,
            difficulty: Difficulty::Easy,
            seed: None,
            reset_difficulty: false,
            opponent: OpponentConfig::default(),
        }
    }

    /// Classical five-move table, ten rounds, easy.
    pub fn classic() -> Self {
        Self {
            moves: Move::CLASSIC.to_vec(),
            relation: Relation::classic(),
            ..Self::extended()
        }
    }

    /// Builder method: set the number of rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds_max = rounds;
        self
    }

    /// Builder method: set the number of tries.
    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builder method: set the starting difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set whether reset restores the starting difficulty.
    pub fn with_reset_difficulty(mut self, enable: bool) -> Self {
        self.reset_difficulty = enable;
        self
    }

    /// Builder method: set the opponent tunables.
    pub fn with_opponent(mut self, opponent: OpponentConfig) -> Self {
        self.opponent = opponent;
        self
    }

    /// Tries available per session.
    pub fn tries_limit(&self) -> u32 {
        self.tries.unwrap_or(self.rounds_max)
    }

    /// Build the rule set described by `moves` and `relation`.
    pub fn rules(&self) -> Result<RuleSet, ConfigError> {
        Ok(RuleSet::new(self.moves.clone(), &self.relation)?)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_max == 0 {
            return Err(ConfigError::InvalidRounds);
        }
        if self.tries == Some(0) {
            return Err(ConfigError::InvalidTries);
        }
        self.opponent.validate()?;
        self.rules()?;
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
