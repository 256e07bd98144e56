//! The session state machine.
//!
//! ```text
//!            submit_move (rounds and tries left)
//!              ┌──────────┐
//!              ▼          │
//!   new ──▶  Active ──────┘
//!              │  submit_move (last round / last try)
//!              ▼
//!           Finished ──── submit_move ──▶ Err(GameAlreadyFinished)
//!              │
//!   reset ─────┴──▶ Active (counters zeroed, history cleared)
//! ```
//!
//! Every call either applies fully or returns an error and leaves the
//! session exactly as it was.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SessionConfig;
use super::export::SessionLog;
use super::record::RoundRecord;
use super::state::{Phase, SessionState, SessionSummary};
use crate::error::{ConfigError, GameError};
use crate::opponent::{Difficulty, Opponent};
use crate::rules::{evaluate, Move, RuleSet};

/// One play-through against the computer, from start or reset to the end.
///
/// The session owns its state and its random source; nothing is shared
/// between sessions, so any number of them can run side by side.
///
/// # Example
/// ```
/// use rpsls_arena::rules::Move;
/// use rpsls_arena::session::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::extended().with_rounds(3).with_seed(1))?;
/// for _ in 0..3 {
///     session.submit_move(Move::Spock)?;
/// }
/// assert!(session.is_finished());
/// assert!(session.submit_move(Move::Rock).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Session<R = StdRng> {
    config: SessionConfig,
    rules: RuleSet,
    opponent: Opponent,
    state: SessionState,
    rng: R,
}

impl Session<StdRng> {
    /// Create a session, seeding from `config.seed` or from entropy.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing from the given random source.
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = config.rules()?;
        let opponent = Opponent::new(&config.opponent);
        let state = SessionState::new(config.rounds_max, config.tries_limit(), config.difficulty);

        log::info!(
            "new session: {} moves, {} rounds, {} tries, difficulty {}",
            rules.len(),
            config.rounds_max,
            config.tries_limit(),
            config.difficulty
        );

        Ok(Self {
            config,
            rules,
            opponent,
            state,
            rng,
        })
    }

    /// Play one round.
    ///
    /// # Errors
    /// - [`GameError::GameAlreadyFinished`] once a bound has been reached.
    /// - [`GameError::InvalidMove`] if `player` is not in the move set.
    pub fn submit_move(&mut self, player: Move) -> Result<RoundRecord, GameError> {
        if self.state.is_finished() {
            log::debug!("rejected {}: session finished", player);
            return Err(GameError::GameAlreadyFinished);
        }
        if !self.rules.contains(player) {
            log::debug!("rejected {}: not in move set", player);
            return Err(GameError::InvalidMove(player));
        }

        let computer = self.opponent.choose_move(
            self.state.difficulty,
            &self.state.history,
            &self.rules,
            &mut self.rng,
        );
        let outcome = evaluate(player, computer, &self.rules);
        let record = RoundRecord::new(self.state.rounds_played + 1, player, computer, outcome);
        self.state.record(record.clone());

        log::debug!(
            "round {}: {} vs {} ({}) -> {:?}",
            record.sequence,
            player,
            computer,
            self.opponent.strategy_name(self.state.difficulty),
            outcome
        );
        if self.state.is_finished() {
            log::info!("session finished: {}", self.state.summary());
        }

        Ok(record)
    }

    /// Play one round with a move given by name.
    pub fn submit_move_named(&mut self, name: &str) -> Result<RoundRecord, GameError> {
        let player: Move = name.parse()?;
        self.submit_move(player)
    }

    /// Change the difficulty for subsequent rounds.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.difficulty != difficulty {
            log::debug!("difficulty {} -> {}", self.state.difficulty, difficulty);
        }
        self.state.difficulty = difficulty;
    }

    /// Start over: zero the counters and clear the history.
    ///
    /// The difficulty survives unless `reset_difficulty` is configured.
    pub fn reset(&mut self) {
        let difficulty = if self.config.reset_difficulty {
            self.config.difficulty
        } else {
            self.state.difficulty
        };
        self.state = SessionState::new(self.config.rounds_max, self.config.tries_limit(), difficulty);
        log::info!("session reset, difficulty {}", difficulty);
    }

    /// Read-only view of scores, counters and history.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Rounds played so far, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.state.history
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether the session is over.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Difficulty for the next round.
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// The rules this session plays by.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current score line.
    pub fn summary(&self) -> SessionSummary {
        self.state.summary()
    }

    /// Exportable log of the rounds played since the last reset.
    pub fn log(&self) -> SessionLog {
        SessionLog::from_state(&self.state, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::{OpponentConfig, ScriptedPlayer, Strategy};
    use crate::rules::Outcome;

    fn session(config: SessionConfig) -> Session {
        Session::new(config.with_seed(42)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let s = session(SessionConfig::extended());
        let state = s.state();
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(state.rounds_played, 0);
        assert_eq!(state.tries_left, 10);
        assert_eq!(state.player_score + state.computer_score + state.ties, 0);
        assert!(state.history.is_empty());
        assert_eq!(state.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_submit_updates_exactly_one_counter() {
        let mut s = session(SessionConfig::extended().with_difficulty(Difficulty::Hard));
        for (i, m) in [Move::Rock, Move::Lizard, Move::Stone, Move::Stone, Move::Paper]
            .into_iter()
            .enumerate()
        {
            let before = s.state().clone();
            let record = s.submit_move(m).unwrap();
            let after = s.state();

            assert_eq!(record.sequence, i as u32 + 1);
            assert_eq!(record.player, m);
            assert_eq!(record.outcome, s.rules().decide(m, record.computer));
            assert_eq!(after.rounds_played, before.rounds_played + 1);
            assert_eq!(after.tries_left, before.tries_left - 1);

            let deltas = [
                after.player_score - before.player_score,
                after.computer_score - before.computer_score,
                after.ties - before.ties,
            ];
            assert_eq!(deltas.iter().sum::<u32>(), 1);
            let expected = match record.outcome {
                Outcome::Win => [1, 0, 0],
                Outcome::Lose => [0, 1, 0],
                Outcome::Tie => [0, 0, 1],
            };
            assert_eq!(deltas, expected);
            assert_eq!(after.history.last(), Some(&record));
        }
    }

    #[test]
    fn test_finishes_after_rounds_max() {
        let mut s = session(SessionConfig::extended().with_rounds(4));
        for _ in 0..4 {
            assert_eq!(s.phase(), Phase::Active);
            s.submit_move(Move::Paper).unwrap();
        }
        assert_eq!(s.phase(), Phase::Finished);

        let frozen = s.state().clone();
        assert_eq!(s.submit_move(Move::Rock), Err(GameError::GameAlreadyFinished));
        assert_eq!(s.submit_move_named("spock"), Err(GameError::GameAlreadyFinished));
        assert_eq!(s.state(), &frozen);
    }

    #[test]
    fn test_finishes_when_tries_run_out() {
        let mut s = session(SessionConfig::extended().with_rounds(10).with_tries(2));
        s.submit_move(Move::Rock).unwrap();
        s.submit_move(Move::Rock).unwrap();
        assert!(s.is_finished());
        assert_eq!(s.state().tries_left, 0);
        assert_eq!(s.state().rounds_played, 2);
        assert_eq!(s.submit_move(Move::Rock), Err(GameError::GameAlreadyFinished));
    }

    #[test]
    fn test_invalid_move_leaves_state_untouched() {
        let mut s = session(SessionConfig::classic());
        s.submit_move(Move::Rock).unwrap();
        let frozen = s.state().clone();

        assert_eq!(s.submit_move(Move::Stone), Err(GameError::InvalidMove(Move::Stone)));
        assert_eq!(
            s.submit_move_named("banana"),
            Err(GameError::UnknownMove("banana".to_string()))
        );
        assert_eq!(s.state(), &frozen);
    }

    #[test]
    fn test_rejected_calls_do_not_consume_randomness() {
        let mut a = session(SessionConfig::classic());
        let mut b = session(SessionConfig::classic());

        let _ = a.submit_move(Move::Stone);
        for _ in 0..5 {
            let left = a.submit_move(Move::Lizard).unwrap();
            let right = b.submit_move(Move::Lizard).unwrap();
            assert!(left.same_play(&right));
        }
    }

    #[test]
    fn test_reset_restores_initial_counters() {
        let mut s = session(SessionConfig::extended().with_rounds(3));
        for _ in 0..3 {
            s.submit_move(Move::Scissors).unwrap();
        }
        assert!(s.is_finished());
        s.set_difficulty(Difficulty::Medium);

        s.reset();
        let state = s.state();
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(state.rounds_played, 0);
        assert_eq!(state.tries_left, 3);
        assert_eq!((state.player_score, state.computer_score, state.ties), (0, 0, 0));
        assert!(state.history.is_empty());
        assert_eq!(state.difficulty, Difficulty::Medium);

        s.submit_move(Move::Rock).unwrap();
        assert_eq!(s.history()[0].sequence, 1);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut s = session(SessionConfig::extended().with_rounds(5));
        s.submit_move(Move::Paper).unwrap();
        s.submit_move(Move::Lizard).unwrap();
        assert_eq!(s.phase(), Phase::Active);

        s.reset();
        let state = s.state();
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(state.rounds_played, 0);
        assert_eq!(state.tries_left, 5);
        assert_eq!((state.player_score, state.computer_score, state.ties), (0, 0, 0));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_reset_difficulty_flag() {
        let mut s = session(
            SessionConfig::extended()
                .with_difficulty(Difficulty::Easy)
                .with_reset_difficulty(true),
        );
        s.set_difficulty(Difficulty::Hard);
        s.submit_move(Move::Rock).unwrap();
        s.reset();
        assert_eq!(s.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_set_difficulty_keeps_scores() {
        let mut s = session(SessionConfig::extended());
        for _ in 0..3 {
            s.submit_move(Move::Rock).unwrap();
        }
        let before = s.state().clone();

        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.state().history, before.history);
        assert_eq!(s.state().rounds_played, before.rounds_played);
        assert_eq!(s.difficulty(), Difficulty::Hard);

        s.submit_move(Move::Rock).unwrap();
        // three Rocks already on record: hard only plays what beats Rock
        let last = s.history().last().unwrap();
        assert!(s.rules().beats(last.computer, Move::Rock));
    }

    #[test]
    fn test_hard_never_loses_to_a_repeater_after_warmup() {
        let mut s = session(SessionConfig::extended().with_rounds(50).with_difficulty(Difficulty::Hard));
        for _ in 0..50 {
            s.submit_move(Move::Lizard).unwrap();
        }
        for record in &s.history()[3..] {
            assert_eq!(record.outcome, Outcome::Lose);
        }
    }

    #[test]
    fn test_medium_never_leaks_when_always_countering() {
        let config = SessionConfig::extended()
            .with_rounds(30)
            .with_difficulty(Difficulty::Medium)
            .with_opponent(OpponentConfig::default().with_medium_random_rate(0.0));
        let mut s = session(config);
        // nothing to count before the first round
        s.submit_move(Move::Rock).unwrap();
        for _ in 1..30 {
            let record = s.submit_move(Move::Rock).unwrap();
            assert!(s.rules().beats(record.computer, Move::Rock));
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let config = SessionConfig::extended()
            .with_rounds(20)
            .with_difficulty(Difficulty::Medium);
        let mut a = session(config.clone());
        let mut b = session(config);
        let mut rng = StdRng::seed_from_u64(5);
        let cycler = ScriptedPlayer::Cycler;

        while !a.is_finished() {
            let m = cycler.choose(a.history(), a.rules(), &mut rng);
            a.submit_move(m).unwrap();
            b.submit_move(m).unwrap();
        }
        assert_eq!(a.history().len(), 20);
        for (x, y) in a.history().iter().zip(b.history()) {
            assert!(x.same_play(y));
        }
        assert_eq!(a.summary(), b.summary());
    }

    #[test]
    fn test_with_rng_injects_generator() {
        let config = SessionConfig::classic().with_rounds(5);
        let mut s = Session::with_rng(config, StdRng::seed_from_u64(3)).unwrap();
        s.submit_move(Move::Rock).unwrap();
        assert_eq!(s.state().rounds_played, 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            Session::new(SessionConfig::extended().with_rounds(0)),
            Err(ConfigError::InvalidRounds)
        ));
    }
}
