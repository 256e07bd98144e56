//! # RPSLS Arena
//!
//! Rock-Paper-Scissors-Lizard-Spock (and the six-move variant with Stone)
//! against a computer opponent with three difficulty tiers.
//!
//! ## Features
//!
//! - **Validated Rules**: Table or cyclic beats relations, checked to be
//!   irreflexive and complete before any game starts
//! - **Adaptive Opponent**: Random, frequency-countering and pattern-reading tiers
//! - **Owned Sessions**: No globals; every session owns its state and RNG
//! - **Reproducible Play**: Seedable randomness for tests and simulations
//! - **Session Logs**: JSON export of every round played
//!
//! ## Quick Start
//!
//! ```
//! use rpsls_arena::{Difficulty, Move, Session, SessionConfig};
//!
//! let config = SessionConfig::extended()
//!     .with_difficulty(Difficulty::Hard)
//!     .with_seed(42);
//! let mut session = Session::new(config)?;
//!
//! let round = session.submit_move(Move::Spock)?;
//! println!("{} vs {}: {}", round.player, round.computer, round.outcome);
//! println!("{}", session.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`rules`]: Moves, beats relations and round evaluation
//! - [`opponent`]: Difficulty tiers and the strategies behind them
//! - [`session`]: Session configuration, state machine and log export
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Session (state machine)                     │
//! │  - Legality checks        - Score / rounds / tries counters     │
//! │  - Round history          - Reset and difficulty changes        │
//! └─────────────────────────────────────────────────────────────────┘
//!                  │                               │
//!                  │ history + difficulty          │ player vs computer
//!                  ▼                               ▼
//!         ┌─────────────────┐             ┌─────────────────┐
//!         │    Opponent     │────────────▶│    RuleSet      │
//!         │ easy/medium/hard│  counters   │ beats / decide  │
//!         └─────────────────┘             └─────────────────┘
//! ```

#![warn(missing_docs)]

/// Error types for rules, sessions and configuration.
pub mod error;

/// Game rules module.
///
/// Moves, beats relations and the round evaluator.
pub mod rules;

/// Computer opponent module.
///
/// Contains the difficulty tiers and their move-selection strategies.
pub mod opponent;

/// Game session module.
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use error::{ConfigError, GameError};
pub use opponent::{Difficulty, Opponent, OpponentConfig};
pub use rules::{Move, Outcome, Relation, RuleSet};
pub use session::{Phase, RoundRecord, Session, SessionConfig, SessionState};
