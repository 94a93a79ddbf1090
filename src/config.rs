//! Session configuration

use std::time::Duration;

use clap::ValueEnum;
use rand::Rng;

/// Pause before the computer answers, so the human sees their own move first
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;

/// Who opens a human-vs-computer game. The opener always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirstMover {
    #[default]
    Human,
    Computer,
    /// Random choice at every new game
    CoinFlip,
}

impl FirstMover {
    /// Resolve the policy for one game
    pub fn computer_moves_first<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            FirstMover::Human => false,
            FirstMover::Computer => true,
            FirstMover::CoinFlip => rng.random_bool(0.5),
        }
    }
}

/// Settings shared by every game of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub computer_delay: Duration,
    pub first_mover: FirstMover,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_delay: Duration::from_millis(DEFAULT_COMPUTER_DELAY_MS),
            first_mover: FirstMover::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay = Duration::from_millis(delay_ms);
        self
    }

    #[must_use]
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }
}
