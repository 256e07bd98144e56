//! Session log export.
//!
//! The core never writes files; this is the collaborator that turns a
//! session's round history into a JSON file a player can keep.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::record::RoundRecord;
use super::state::{SessionState, SessionSummary};
use crate::opponent::Difficulty;
use crate::rules::{Move, RuleSet};

/// Everything needed to replay or audit a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    /// When the log was taken.
    pub exported_at: DateTime<Utc>,
    /// Move set the session was played with.
    pub moves: Vec<Move>,
    /// Difficulty at export time.
    pub difficulty: Difficulty,
    /// Score line at export time.
    pub summary: SessionSummary,
    /// Every round since the last reset, oldest first.
    pub rounds: Vec<RoundRecord>,
}

impl SessionLog {
    /// Snapshot a session state.
    pub fn from_state(state: &SessionState, rules: &RuleSet) -> Self {
        Self {
            exported_at: Utc::now(),
            moves: rules.moves().to_vec(),
            difficulty: state.difficulty,
            summary: state.summary(),
            rounds: state.history.clone(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }

    /// Load a previously saved log.
    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `rpsls_session_<timestamp>.json`, safe on every filesystem.
    pub fn default_file_name(&self) -> String {
        let stamp = self
            .exported_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
            .replace(':', "-");
        format!("rpsls_session_{}.json", stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionConfig};

    fn played_session() -> Session {
        let mut session = Session::new(SessionConfig::classic().with_rounds(3).with_seed(8)).unwrap();
        session.submit_move(Move::Rock).unwrap();
        session.submit_move(Move::Spock).unwrap();
        session
    }

    #[test]
    fn test_log_mirrors_state() {
        let session = played_session();
        let log = session.log();
        assert_eq!(log.moves, Move::CLASSIC.to_vec());
        assert_eq!(log.rounds, session.history().to_vec());
        assert_eq!(log.summary, session.summary());
        assert_eq!(log.summary.rounds_played, 2);
    }

    #[test]
    fn test_save_and_load() {
        let log = played_session().log();
        let path = std::env::temp_dir().join(format!("rpsls_test_{}.json", std::process::id()));
        log.save_json(&path).unwrap();
        let loaded = SessionLog::load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, log);
    }

    #[test]
    fn test_json_shape() {
        let log = played_session().log();
        let value: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(value["rounds"].as_array().unwrap().len(), 2);
        assert_eq!(value["rounds"][1]["player"], "spock");
        assert_eq!(value["rounds"][1]["round"], 2);
        assert_eq!(value["difficulty"], "easy");
    }

    #[test]
    fn test_default_file_name() {
        let name = played_session().log().default_file_name();
        assert!(name.starts_with("rpsls_session_"));
        assert!(name.ends_with("Z.json"));
        assert!(!name.contains(':'));
    }
}
