//! Game sessions: configuration, the round-by-round state machine and the
//! exported session log.
//!
//! A [`Session`] ties a [`RuleSet`](crate::rules::RuleSet) and an
//! [`Opponent`](crate::opponent::Opponent) to a [`SessionState`]:
//!
//! 1. the caller submits a move,
//! 2. the session checks the game is still on and the move is legal,
//! 3. the opponent picks the computer's move from the history,
//! 4. the round is evaluated, recorded and the counters updated,
//! 5. the session turns `Finished` when rounds or tries run out.

pub mod config;
pub mod export;
pub mod machine;
pub mod record;
pub mod state;

pub use config::SessionConfig;
pub use export::SessionLog;
pub use machine::Session;
pub use record::RoundRecord;
pub use state::{Phase, SessionState, SessionSummary, Verdict};
