//! Error types.
//!
//! [`GameError`] covers everything a running game can reject: bad moves,
//! moves after the game is over and rule sets that do not describe a fair
//! cyclic game. [`ConfigError`] covers loading and validating a
//! [`SessionConfig`](crate::session::SessionConfig).

use thiserror::Error;

use crate::rules::Move;

/// Errors raised by the rules and the session state machine.
///
/// A call that returns one of these leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is a real move but not part of this game's move set.
    #[error("{0} is not part of this game's move set")]
    InvalidMove(Move),

    /// The name does not parse to any move.
    #[error("unknown move '{0}'")]
    UnknownMove(String),

    /// A move was submitted after the last round was played.
    #[error("game over: restart to play again")]
    GameAlreadyFinished,

    /// The beats relation is not irreflexive, asymmetric and complete.
    #[error("invalid ruleset: {0}")]
    InvalidRuleset(String),
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for this schema.
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `rounds_max` must be positive.
    #[error("rounds_max must be at least 1")]
    InvalidRounds,

    /// `tries` was set to zero.
    #[error("tries must be at least 1 when set")]
    InvalidTries,

    /// A probability is out of range [0, 1].
    #[error("{0} {1} is out of range [0, 1]")]
    InvalidRate(&'static str, f64),

    /// The pattern window cannot hold the repeat run it looks for.
    #[error("hard_window {window} must be >= repeat_run {run}, and repeat_run must be >= 1")]
    InvalidWindow {
        /// Trailing window size.
        window: usize,
        /// Length of the repeat run.
        run: usize,
    },

    /// A difficulty name that is not easy, medium or hard.
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    /// A scripted player name that is not random, repeater or cycler.
    #[error("unknown scripted player '{0}'")]
    UnknownPlayer(String),

    /// The configured move set and relation do not form a valid rule set.
    #[error(transparent)]
    Rules(#[from] GameError),
}
