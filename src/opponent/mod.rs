//! The computer opponent.
//!
//! Given a difficulty, the rounds played so far and the rule set, the
//! opponent produces the computer's next move. It owns no state: the
//! history is supplied by the caller and never modified, and randomness
//! comes from a generator the caller passes in.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rpsls_arena::opponent::{choose_move, Difficulty};
//! use rpsls_arena::rules::RuleSet;
//!
//! let rules = RuleSet::extended();
//! let mut rng = StdRng::seed_from_u64(42);
//! let m = choose_move(Difficulty::Hard, &[], &rules, &mut rng);
//! assert!(rules.contains(m));
//! ```

pub mod config;
pub mod difficulty;
pub mod scripted;
pub mod strategy;

pub use config::OpponentConfig;
pub use difficulty::Difficulty;
pub use scripted::ScriptedPlayer;
pub use strategy::{
    choose_move, counter_move, most_frequent, random_move, FrequencyCounter, Opponent,
    PatternReader, Strategy, Uniform,
};
