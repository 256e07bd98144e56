//! Scripted stand-ins for a human player.
//!
//! Used by the simulation harness and the session tests to drive a session
//! with predictable input. They implement [`Strategy`] too: a scripted
//! player is just a strategy that picks the *player's* move.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::strategy::{random_move, Strategy};
use crate::error::ConfigError;
use crate::rules::{Move, RuleSet};
use crate::session::RoundRecord;

/// A deterministic or random player policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptedPlayer {
    /// Uniformly random moves.
    Random,
    /// Always the same move.
    Repeater(Move),
    /// Walks the move list in order, starting from the first move.
    Cycler,
}

impl ScriptedPlayer {
    /// The three policies, with the repeater on rock.
    pub const ALL: [ScriptedPlayer; 3] = [
        ScriptedPlayer::Random,
        ScriptedPlayer::Repeater(Move::Rock),
        ScriptedPlayer::Cycler,
    ];
}

impl Strategy for ScriptedPlayer {
    fn choose<R: Rng + ?Sized>(&self, history: &[RoundRecord], rules: &RuleSet, rng: &mut R) -> Move {
        match self {
            ScriptedPlayer::Random => random_move(rules, rng),
            ScriptedPlayer::Repeater(m) => *m,
            ScriptedPlayer::Cycler => rules.moves()[history.len() % rules.len()],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScriptedPlayer::Random => "random",
            ScriptedPlayer::Repeater(_) => "repeater",
            ScriptedPlayer::Cycler => "cycler",
        }
    }
}

impl fmt::Display for ScriptedPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptedPlayer::Repeater(m) => write!(f, "repeater:{}", m.name()),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for ScriptedPlayer {
    type Err = ConfigError;

    /// Parses `random`, `cycler`, `repeater` (rock) or `repeater:<move>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.split_once(':') {
            Some(("repeater", m)) => Ok(ScriptedPlayer::Repeater(m.parse::<Move>()?)),
            _ => match s.as_str() {
                "random" => Ok(ScriptedPlayer::Random),
                "cycler" => Ok(ScriptedPlayer::Cycler),
                "repeater" => Ok(ScriptedPlayer::Repeater(Move::Rock)),
                _ => Err(ConfigError::UnknownPlayer(s)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::rules::Outcome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cycler_walks_the_list() {
        let rules = RuleSet::classic();
        let mut rng = StdRng::seed_from_u64(0);
        let mut history = Vec::new();
        let mut played = Vec::new();
        for i in 0..7 {
            let m = ScriptedPlayer::Cycler.choose(&history, &rules, &mut rng);
            played.push(m);
            history.push(RoundRecord::new(i + 1, m, Move::Rock, Outcome::Tie));
        }
        assert_eq!(
            played,
            vec![
                Move::Rock,
                Move::Paper,
                Move::Scissors,
                Move::Lizard,
                Move::Spock,
                Move::Rock,
                Move::Paper
            ]
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        for player in ScriptedPlayer::ALL {
            assert_eq!(player.to_string().parse::<ScriptedPlayer>().ok(), Some(player));
        }
        assert_eq!(
            "repeater:spock".parse::<ScriptedPlayer>().ok(),
            Some(ScriptedPlayer::Repeater(Move::Spock))
        );
    }

    #[test]
    fn test_parse_errors_name_what_was_wrong() {
        assert!(matches!(
            "repeater:banana".parse::<ScriptedPlayer>(),
            Err(ConfigError::Rules(GameError::UnknownMove(_)))
        ));
        match "genius".parse::<ScriptedPlayer>() {
            Err(ConfigError::UnknownPlayer(name)) => assert_eq!(name, "genius"),
            other => panic!("expected UnknownPlayer, got {:?}", other),
        }
    }
}
