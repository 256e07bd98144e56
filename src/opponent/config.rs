//! Tunables for the computer opponent.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters of the medium and hard strategies.
///
/// # Example
/// ```
/// use rpsls_arena::opponent::OpponentConfig;
///
/// let config = OpponentConfig::default();
/// assert_eq!(config.medium_random_rate, 0.6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Probability that the medium opponent ignores the history and plays
    /// uniformly at random.
    pub medium_random_rate: f64,

    /// How many of the player's latest moves the hard opponent looks at.
    pub hard_window: usize,

    /// Length of the identical-move run the hard opponent punishes.
    pub repeat_run: usize,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            medium_random_rate: 0.6,
            hard_window: 6,
            repeat_run: 3,
        }
    }
}

impl OpponentConfig {
    /// Builder method: set the medium opponent's random rate.
    pub fn with_medium_random_rate(mut self, rate: f64) -> Self {
        self.medium_random_rate = rate;
        self
    }

    /// Builder method: set the hard opponent's window and repeat run.
    pub fn with_pattern(mut self, window: usize, run: usize) -> Self {
        self.hard_window = window;
        self.repeat_run = run;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.medium_random_rate) {
            return Err(ConfigError::InvalidRate(
                "medium_random_rate",
                self.medium_random_rate,
            ));
        }
        if self.repeat_run == 0 || self.hard_window < self.repeat_run {
            return Err(ConfigError::InvalidWindow {
                window: self.hard_window,
                run: self.repeat_run,
            });
        }
        Ok(())
    }
}
