//! Session counters, lifecycle phase and end-of-game summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::RoundRecord;
use crate::opponent::Difficulty;
use crate::rules::Outcome;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Rounds and tries remain.
    Active,
    /// A bound was reached; only `reset()` brings the session back.
    Finished,
}

/// Who came out ahead over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// More rounds won than lost.
    PlayerWins,
    /// More rounds lost than won.
    ComputerWins,
    /// Level scores.
    Draw,
}

/// Snapshot of a session's scores and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Rounds completed since the last reset.
    pub rounds_played: u32,
    /// Rounds per session.
    pub rounds_max: u32,
    /// Tries remaining.
    pub tries_left: u32,
    /// Rounds won by the player.
    pub player_score: u32,
    /// Rounds won by the computer.
    pub computer_score: u32,
    /// Tied rounds.
    pub ties: u32,
    /// Every round since the last reset, oldest first.
    pub history: Vec<RoundRecord>,
    /// Difficulty used for the next round.
    pub difficulty: Difficulty,
}

impl SessionState {
    /// Fresh state with zeroed counters.
    pub fn new(rounds_max: u32, tries: u32, difficulty: Difficulty) -> Self {
        Self {
            rounds_played: 0,
            rounds_max,
            tries_left: tries,
            player_score: 0,
            computer_score: 0,
            ties: 0,
            history: Vec::new(),
            difficulty,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.rounds_played >= self.rounds_max || self.tries_left == 0 {
            Phase::Finished
        } else {
            Phase::Active
        }
    }

    /// Whether the session is over.
    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Rounds that can still be played before a bound is hit.
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_max
            .saturating_sub(self.rounds_played)
            .min(self.tries_left)
    }

    /// Append a resolved round and bump the counters.
    pub(crate) fn record(&mut self, record: RoundRecord) {
        self.rounds_played += 1;
        self.tries_left = self.tries_left.saturating_sub(1);
        match record.outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.computer_score += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.history.push(record);
    }

    /// Final score line.
    pub fn summary(&self) -> SessionSummary {
        let verdict = match self.player_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => Verdict::PlayerWins,
            std::cmp::Ordering::Less => Verdict::ComputerWins,
            std::cmp::Ordering::Equal => Verdict::Draw,
        };
        SessionSummary {
            rounds_played: self.rounds_played,
            player_score: self.player_score,
            computer_score: self.computer_score,
            ties: self.ties,
            verdict,
        }
    }
}

/// Scores at a point in the session, usually its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Rounds completed.
    pub rounds_played: u32,
    /// Rounds won by the player.
    pub player_score: u32,
    /// Rounds won by the computer.
    pub computer_score: u32,
    /// Tied rounds.
    pub ties: u32,
    /// Who is ahead.
    pub verdict: Verdict,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Final: You {} - Computer {} (Ties {})",
            self.player_score, self.computer_score, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Move;

    fn round(sequence: u32, outcome: Outcome) -> RoundRecord {
        RoundRecord::new(sequence, Move::Rock, Move::Paper, outcome)
    }

    #[test]
    fn test_phase_follows_both_bounds() {
        let mut by_rounds = SessionState::new(2, 5, Difficulty::Easy);
        by_rounds.record(round(1, Outcome::Win));
        assert_eq!(by_rounds.phase(), Phase::Active);
        by_rounds.record(round(2, Outcome::Win));
        assert_eq!(by_rounds.phase(), Phase::Finished);

        let mut by_tries = SessionState::new(5, 1, Difficulty::Easy);
        assert_eq!(by_tries.rounds_remaining(), 1);
        by_tries.record(round(1, Outcome::Tie));
        assert!(by_tries.is_finished());
        assert_eq!(by_tries.rounds_remaining(), 0);
    }

    #[test]
    fn test_summary_verdicts() {
        let mut state = SessionState::new(10, 10, Difficulty::Easy);
        assert_eq!(state.summary().verdict, Verdict::Draw);
        state.record(round(1, Outcome::Lose));
        assert_eq!(state.summary().verdict, Verdict::ComputerWins);
        state.record(round(2, Outcome::Win));
        state.record(round(3, Outcome::Win));
        let summary = state.summary();
        assert_eq!(summary.verdict, Verdict::PlayerWins);
        assert_eq!(summary.to_string(), "Final: You 2 - Computer 1 (Ties 0)");
    }
}
