//! Move selection for the computer opponent.
//!
//! Each difficulty tier is a [`Strategy`]:
//!
//! | Tier | Strategy | Behaviour |
//! |---|---|---|
//! | easy | [`Uniform`] | uniform over the move set |
//! | medium | [`FrequencyCounter`] | random with probability p, else counter the player's most frequent move |
//! | hard | [`PatternReader`] | counter a repeated move, else counter the predicted next move |
//!
//! Strategies are pure: they read the history and the rule set and consume
//! draws from the caller's random source, nothing else. Any `R: Rng` works,
//! so tests and simulations seed a `StdRng` to make play reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::OpponentConfig;
use super::difficulty::Difficulty;
use crate::rules::{Move, RuleSet};
use crate::session::RoundRecord;

/// Thresholds of the hard opponent's opening draw: `r < 0.2` plays the
/// first move, `r < 0.6` the third, anything else the fifth.
const OPENING_WEIGHTS: [(f64, usize); 3] = [(0.2, 0), (0.6, 2), (1.0, 4)];

/// A way of picking the computer's next move.
pub trait Strategy {
    /// Pick a move given the rounds played so far.
    fn choose<R: Rng + ?Sized>(&self, history: &[RoundRecord], rules: &RuleSet, rng: &mut R) -> Move;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Uniformly random move from the move set.
pub fn random_move<R: Rng + ?Sized>(rules: &RuleSet, rng: &mut R) -> Move {
    rules.moves()[rng.gen_range(0..rules.len())]
}

/// Uniformly random move among those that beat `target`.
///
/// Falls back to [`random_move`] if nothing beats `target`, which a
/// validated rule set only allows for moves outside the set.
pub fn counter_move<R: Rng + ?Sized>(target: Move, rules: &RuleSet, rng: &mut R) -> Move {
    match rules.counters(target).choose(rng) {
        Some(&m) => m,
        None => random_move(rules, rng),
    }
}

/// The player's most frequent move.
///
/// Ties go to the move that was played first in the session.
pub fn most_frequent(history: &[RoundRecord]) -> Option<Move> {
    let mut counts: Vec<(Move, usize)> = Vec::new();
    for record in history {
        match counts.iter_mut().find(|(m, _)| *m == record.player) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.player, 1)),
        }
    }

    let mut best: Option<(Move, usize)> = None;
    for (m, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((m, n));
        }
    }
    best.map(|(m, _)| m)
}

/// Easy tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Strategy for Uniform {
    fn choose<R: Rng + ?Sized>(&self, _history: &[RoundRecord], rules: &RuleSet, rng: &mut R) -> Move {
        random_move(rules, rng)
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Medium tier: counters the player's favourite move some of the time.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyCounter {
    random_rate: f64,
}

impl FrequencyCounter {
    /// Create with the probability of playing at random instead.
    pub fn new(random_rate: f64) -> Self {
        Self { random_rate }
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(OpponentConfig::default().medium_random_rate)
    }
}

impl Strategy for FrequencyCounter {
    fn choose<R: Rng + ?Sized>(&self, history: &[RoundRecord], rules: &RuleSet, rng: &mut R) -> Move {
        if rng.gen::<f64>() < self.random_rate {
            return random_move(rules, rng);
        }
        match most_frequent(history) {
            Some(favourite) => counter_move(favourite, rules, rng),
            None => random_move(rules, rng),
        }
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

/// Hard tier: reads the player's recent moves.
///
/// Over the last `window` player moves:
/// 1. if the last `run` are identical, counter that move;
/// 2. otherwise assume the player steps to the next move in list order and
///    counter that;
/// 3. with fewer than `run` moves played, use a fixed weighted opening.
#[derive(Debug, Clone, Copy)]
pub struct PatternReader {
    window: usize,
    run: usize,
}

impl PatternReader {
    /// Create with the trailing window size and the repeat run length.
    pub fn new(window: usize, run: usize) -> Self {
        Self { window, run }
    }

    fn opening<R: Rng + ?Sized>(rules: &RuleSet, rng: &mut R) -> Move {
        let r: f64 = rng.gen();
        let slot = OPENING_WEIGHTS
            .iter()
            .find(|(threshold, _)| r < *threshold)
            .map_or(4, |&(_, slot)| slot);
        rules.moves()[slot % rules.len()]
    }
}

impl Default for PatternReader {
    fn default() -> Self {
        let config = OpponentConfig::default();
        Self::new(config.hard_window, config.repeat_run)
    }
}

impl Strategy for PatternReader {
    fn choose<R: Rng + ?Sized>(&self, history: &[RoundRecord], rules: &RuleSet, rng: &mut R) -> Move {
        let start = history.len().saturating_sub(self.window);
        let recent: Vec<Move> = history[start..].iter().map(|r| r.player).collect();

        if self.run > 0 && recent.len() >= self.run {
            let tail = &recent[recent.len() - self.run..];
            if let Some(&last) = tail.last() {
                if tail.iter().all(|&m| m == last) {
                    return counter_move(last, rules, rng);
                }
                if let Some(predicted) = rules.successor(last) {
                    return counter_move(predicted, rules, rng);
                }
            }
        }

        Self::opening(rules, rng)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

/// The three tiers, configured once and dispatched by [`Difficulty`].
#[derive(Debug, Clone, Default)]
pub struct Opponent {
    easy: Uniform,
    medium: FrequencyCounter,
    hard: PatternReader,
}

impl Opponent {
    /// Build the tiers from tunables.
    pub fn new(config: &OpponentConfig) -> Self {
        Self {
            easy: Uniform,
            medium: FrequencyCounter::new(config.medium_random_rate),
            hard: PatternReader::new(config.hard_window, config.repeat_run),
        }
    }

    /// Pick the computer's move for the given difficulty.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        history: &[RoundRecord],
        rules: &RuleSet,
        rng: &mut R,
    ) -> Move {
        match difficulty {
            Difficulty::Easy => self.easy.choose(history, rules, rng),
            Difficulty::Medium => self.medium.choose(history, rules, rng),
            Difficulty::Hard => self.hard.choose(history, rules, rng),
        }
    }

    /// Name of the strategy behind a difficulty.
    pub fn strategy_name(&self, difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Easy => self.easy.name(),
            Difficulty::Medium => self.medium.name(),
            Difficulty::Hard => self.hard.name(),
        }
    }
}

/// Pick the computer's move with the default tunables.
pub fn choose_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    history: &[RoundRecord],
    rules: &RuleSet,
    rng: &mut R,
) -> Move {
    Opponent::default().choose_move(difficulty, history, rules, rng)
}
