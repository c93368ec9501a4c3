//! Win/loss accumulator for a run of trials.

use serde::{Deserialize, Serialize};

use crate::trial::TrialOutcome;

/// Signed tally of trial outcomes: +1 per win, -1 per loss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one trial result.
    pub fn record(&mut self, wins: bool) {
        if wins {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn record_outcome(&mut self, outcome: &TrialOutcome) {
        self.record(outcome.wins);
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        self.wins += other.wins;
        self.losses += other.losses;
    }

    #[must_use]
    pub fn trials(&self) -> u32 {
        self.wins + self.losses
    }

    /// Wins minus losses. This is the number a run reports.
    #[must_use]
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }

    /// Fraction of trials won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.trials() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.trials())
        }
    }

    /// Standard error of `win_rate` (binomial).
    #[must_use]
    pub fn std_error(&self) -> f64 {
        let n = self.trials();
        if n <= 1 {
            return 0.0;
        }
        let p = self.win_rate();
        (p * (1.0 - p) / f64::from(n)).sqrt()
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.net())
    }
}
