//! Round records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{Move, Outcome};

/// One completed round.
///
/// Records are created by the session when a round resolves and only ever
/// handed out by shared reference or by value, so the history cannot be
/// edited after the fact. Field names in the serialized form follow the
/// session log format (`round`, `player`, `ai`, `result`, `time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    #[serde(rename = "round")]
    pub sequence: u32,
    /// The player's move.
    pub player: Move,
    /// The computer's move.
    #[serde(rename = "ai")]
    pub computer: Move,
    /// Outcome from the player's perspective.
    #[serde(rename = "result")]
    pub outcome: Outcome,
    /// When the round resolved.
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
}

impl RoundRecord {
    /// Create a record stamped with the current time.
    pub fn new(sequence: u32, player: Move, computer: Move, outcome: Outcome) -> Self {
        Self {
            sequence,
            player,
            computer,
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// Same round, ignoring when it happened.
    pub fn same_play(&self, other: &RoundRecord) -> bool {
        self.sequence == other.sequence
            && self.player == other.player
            && self.computer == other.computer
            && self.outcome == other.outcome
    }
}
