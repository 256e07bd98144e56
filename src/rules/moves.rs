//! The move universe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// One selectable option in the game.
///
/// The universe is closed: a game picks an ordered subset of these, and the
/// order matters for cyclic rule generation and for pattern prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Rock
    Rock,
    /// Paper
    Paper,
    /// Scissors
    Scissors,
    /// Lizard
    Lizard,
    /// Spock
    Spock,
    /// Stone (sixth move of the extended game)
    Stone,
}

impl Move {
    /// All six moves, in extended-game order.
    pub const ALL: [Move; 6] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
        Move::Stone,
    ];

    /// The five moves of classical Rock-Paper-Scissors-Lizard-Spock.
    pub const CLASSIC: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Lowercase identifier, as used in configs and session logs.
    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
            Move::Stone => "stone",
        }
    }

    /// Capitalised label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
            Move::Stone => "Stone",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "scissor" | "s" => Ok(Move::Scissors),
            "lizard" | "l" => Ok(Move::Lizard),
            "spock" | "k" => Ok(Move::Spock),
            "stone" | "t" => Ok(Move::Stone),
            _ => Err(GameError::UnknownMove(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("  Spock ".parse::<Move>(), Ok(Move::Spock));
        assert_eq!("SCISSOR".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!("t".parse::<Move>(), Ok(Move::Stone));
        assert_eq!(
            "dynamite".parse::<Move>(),
            Err(GameError::UnknownMove("dynamite".to_string()))
        );
    }

    #[test]
    fn test_names_parse_back() {
        for m in Move::ALL {
            assert_eq!(m.name().parse::<Move>(), Ok(m));
            assert_eq!(m.label().parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Move::Lizard).unwrap();
        assert_eq!(json, "\"lizard\"");
        let back: Move = serde_json::from_str("\"stone\"").unwrap();
        assert_eq!(back, Move::Stone);
    }
}
