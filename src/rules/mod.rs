//! Game rules: the move universe, the beats relation and round evaluation.
//!
//! # Overview
//!
//! Every game is an ordered list of [`Move`]s plus a [`Relation`] describing
//! who beats whom. [`RuleSet::new`] turns the two into a validated rule set,
//! failing fast when the relation is not a fair cyclic game:
//!
//! - no move beats itself,
//! - for every pair of distinct moves exactly one beats the other.
//!
//! Two presets ship with the crate:
//!
//! | Preset | Moves | Relation |
//! |---|---|---|
//! | [`RuleSet::classic`] | rock, paper, scissors, lizard, spock | classical table |
//! | [`RuleSet::extended`] | + stone | beats the next two, opposite pairs to the first listed |
//!
//! # Example
//!
//! ```
//! use rpsls_arena::rules::{Move, Outcome, RuleSet};
//!
//! let rules = RuleSet::classic();
//! assert_eq!(rules.decide(Move::Spock, Move::Rock), Outcome::Win);
//! assert_eq!(rules.counters(Move::Rock), vec![Move::Paper, Move::Spock]);
//! ```

pub mod moves;
pub mod outcome;
pub mod ruleset;

pub use moves::Move;
pub use outcome::{evaluate, Outcome};
pub use ruleset::{Opposites, Relation, RuleSet};
