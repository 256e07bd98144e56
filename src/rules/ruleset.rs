//! Beats relations and the validated rule set built from them.
//!
//! A [`RuleSet`] is an ordered move list plus a beats relation that has been
//! checked to be a fair cyclic game: no move beats itself, and every pair of
//! distinct moves has exactly one winner. Two generators are supported:
//!
//! - [`Relation::Table`]: an explicit winner → losers table (classical RPSLS).
//! - [`Relation::Cyclic`]: the move at index `i` beats the moves at
//!   `i+1 ..= i+reach` (mod N).
//!
//! ## Even move counts
//!
//! With an even number of moves a cyclic rule can never decide the pairs that
//! sit exactly opposite each other (distance N/2): "beats the next two" over
//! six moves leaves rock/lizard, paper/spock and scissors/stone open.
//! [`Opposites::FirstListed`] settles those pairs in favour of the move listed
//! first; [`Opposites::Undecided`] leaves them open and validation rejects the
//! relation.
//!
//! ```text
//!   Extended game (reach 2, FirstListed)
//!
//!   rock ──▶ paper, scissors, lizard*
//!   paper ──▶ scissors, lizard, spock*
//!   scissors ──▶ lizard, spock, stone*
//!   lizard ──▶ spock, stone
//!   spock ──▶ stone, rock
//!   stone ──▶ rock, paper
//!                                 * opposite pair
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::moves::Move;
use super::outcome::{evaluate, Outcome};
use crate::error::GameError;

/// How diametrically opposite moves are settled by a cyclic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opposites {
    /// Leave opposite pairs without a winner.
    #[default]
    Undecided,
    /// The move listed earlier wins its opposite pair.
    FirstListed,
}

/// Generator for a beats relation over an ordered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Relation {
    /// Explicit table: each move maps to the moves it defeats.
    Table {
        /// winner → defeated moves
        wins: BTreeMap<Move, Vec<Move>>,
    },
    /// Each move beats the `reach` moves that follow it in cyclic order.
    Cyclic {
        /// How many following moves each move beats.
        reach: usize,
        /// Policy for opposite pairs when the move count is even.
        #[serde(default)]
        opposites: Opposites,
    },
}

impl Relation {
    /// The classical Rock-Paper-Scissors-Lizard-Spock table.
    pub fn classic() -> Self {
        let wins = BTreeMap::from([
            (Move::Rock, vec![Move::Scissors, Move::Lizard]),
            (Move::Paper, vec![Move::Rock, Move::Spock]),
            (Move::Scissors, vec![Move::Paper, Move::Lizard]),
            (Move::Lizard, vec![Move::Spock, Move::Paper]),
            (Move::Spock, vec![Move::Scissors, Move::Rock]),
        ]);
        Relation::Table { wins }
    }

    /// "Beats the next two", with opposite pairs going to the first listed.
    pub fn extended() -> Self {
        Relation::Cyclic {
            reach: 2,
            opposites: Opposites::FirstListed,
        }
    }
}

/// A validated move set and beats relation.
///
/// Immutable once built; share it by reference between sessions and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    moves: Vec<Move>,
    /// `wins[i]` has bit `j` set when `moves[i]` beats `moves[j]`.
    wins: Vec<u8>,
}

impl RuleSet {
    /// Build and validate a rule set.
    ///
    /// # Errors
    /// [`GameError::InvalidRuleset`] when the move list has fewer than three
    /// moves or duplicates, when a table names a move outside the list, or
    /// when the relation is not irreflexive, asymmetric and complete.
    pub fn new(moves: Vec<Move>, relation: &Relation) -> Result<Self, GameError> {
        if moves.len() < 3 {
            return Err(GameError::InvalidRuleset(format!(
                "a cyclic game needs at least three moves, got {}",
                moves.len()
            )));
        }
        for (i, m) in moves.iter().enumerate() {
            if moves[..i].contains(m) {
                return Err(GameError::InvalidRuleset(format!("{} is listed twice", m)));
            }
        }

        let rules = Self::build(moves, relation)?;
        rules.validate()?;
        Ok(rules)
    }

    /// The five-move classical game.
    pub fn classic() -> Self {
        Self::preset(Move::CLASSIC.to_vec(), &Relation::classic())
    }

    /// The six-move extended game.
    pub fn extended() -> Self {
        Self::preset(Move::ALL.to_vec(), &Relation::extended())
    }

    fn preset(moves: Vec<Move>, relation: &Relation) -> Self {
        match Self::new(moves, relation) {
            Ok(rules) => rules,
            // Presets are fixed tables, checked by test_presets_match_validated_construction.
            Err(e) => unreachable!("preset ruleset is invalid: {}", e),
        }
    }

    fn build(moves: Vec<Move>, relation: &Relation) -> Result<Self, GameError> {
        let n = moves.len();
        let mut wins = vec![0u8; n];

        match relation {
            Relation::Table { wins: table } => {
                let index = |m: &Move| {
                    moves.iter().position(|x| x == m).ok_or_else(|| {
                        GameError::InvalidRuleset(format!("table names {}, which is not in the move set", m))
                    })
                };
                for (winner, losers) in table {
                    let i = index(winner)?;
                    for loser in losers {
                        wins[i] |= 1 << index(loser)?;
                    }
                }
            }
            Relation::Cyclic { reach, opposites } => {
                if *reach >= n {
                    return Err(GameError::InvalidRuleset(format!(
                        "reach {} over {} moves: every move beats itself",
                        reach, n
                    )));
                }
                for (i, mask) in wins.iter_mut().enumerate() {
                    for k in 1..=*reach {
                        *mask |= 1 << ((i + k) % n);
                    }
                }
                if *opposites == Opposites::FirstListed && n % 2 == 0 {
                    for i in 0..n / 2 {
                        wins[i] |= 1 << (i + n / 2);
                    }
                }
            }
        }

        Ok(Self { moves, wins })
    }

    fn validate(&self) -> Result<(), GameError> {
        let n = self.moves.len();
        for i in 0..n {
            if self.wins[i] & (1 << i) != 0 {
                return Err(GameError::InvalidRuleset(format!("{} beats itself", self.moves[i])));
            }
            for j in (i + 1)..n {
                let forward = self.wins[i] & (1 << j) != 0;
                let backward = self.wins[j] & (1 << i) != 0;
                match (forward, backward) {
                    (true, true) => {
                        return Err(GameError::InvalidRuleset(format!(
                            "{} and {} beat each other",
                            self.moves[i], self.moves[j]
                        )))
                    }
                    (false, false) => {
                        return Err(GameError::InvalidRuleset(format!(
                            "no winner between {} and {}",
                            self.moves[i], self.moves[j]
                        )))
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// The move set, in configured order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: a rule set holds at least three moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of a move in the move list.
    pub fn position(&self, m: Move) -> Option<usize> {
        self.moves.iter().position(|&x| x == m)
    }

    /// Whether the move is part of this game.
    pub fn contains(&self, m: Move) -> bool {
        self.position(m).is_some()
    }

    /// The move after `m` in cyclic list order.
    pub fn successor(&self, m: Move) -> Option<Move> {
        self.position(m).map(|i| self.moves[(i + 1) % self.moves.len()])
    }

    /// True iff `a` defeats `b`. Moves outside the set never win.
    pub fn beats(&self, a: Move, b: Move) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => self.wins[i] & (1 << j) != 0,
            _ => false,
        }
    }

    /// Outcome of `a` against `b`, from `a`'s perspective.
    pub fn decide(&self, a: Move, b: Move) -> Outcome {
        evaluate(a, b, self)
    }

    /// Every move that beats `target`, in move list order.
    pub fn counters(&self, target: Move) -> Vec<Move> {
        self.moves
            .iter()
            .copied()
            .filter(|&m| self.beats(m, target))
            .collect()
    }

    /// Every move `m` defeats, in move list order.
    pub fn defeats(&self, m: Move) -> Vec<Move> {
        self.moves
            .iter()
            .copied()
            .filter(|&x| self.beats(m, x))
            .collect()
    }
}
