//! Round outcomes and the round evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::moves::Move;
use super::ruleset::RuleSet;

/// Result of one round, from one side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// This side's move beats the other.
    Win,
    /// The other side's move beats this one.
    Lose,
    /// Both sides played the same move.
    Tie,
}

impl Outcome {
    /// The same round seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "You win!"),
            Outcome::Lose => write!(f, "You lose"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Evaluate a round from the player's perspective.
///
/// `Tie` iff both moves are equal, `Win` iff the player's move beats the
/// computer's, `Lose` otherwise.
pub fn evaluate(player: Move, computer: Move, rules: &RuleSet) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if rules.beats(player, computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
