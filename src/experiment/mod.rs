//! Repeated trials and their tally.
//!
//! ## Usage
//!
//! ```
//! use excess_odds::core::ExperimentConfig;
//! use excess_odds::experiment::Experiment;
//! use excess_odds::trial::Silent;
//!
//! let config = ExperimentConfig::default().with_trials(1_000).with_seed(42);
//! let tally = Experiment::new(config).run(&mut Silent).unwrap();
//!
//! assert_eq!(tally.trials(), 1_000);
//! assert!(tally.net().abs() <= 1_000);
//! ```

pub mod tally;

pub use tally::Tally;

use tracing::{debug, info};

use crate::core::{ExperimentConfig, SimRng};
use crate::error::Result;
use crate::trial::{run_trial, DrawObserver};

/// Runs the configured number of trials against one random stream.
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    rng: SimRng,
}

impl Experiment {
    /// Create an experiment. Draws an entropy seed if the config has none.
    pub fn new(config: ExperimentConfig) -> Self {
        let rng = config.rng();
        Self { config, rng }
    }

    /// Seed of the random stream, whether configured or drawn.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Run every trial in sequence and return the tally.
    ///
    /// The random stream carries on from where it left off, so calling this
    /// twice runs two different batches.
    pub fn run<O: DrawObserver + ?Sized>(&mut self, observer: &mut O) -> Result<Tally> {
        info!(
            trials = self.config.trials,
            seed = self.rng.seed(),
            "starting experiment"
        );

        let mut tally = Tally::new();
        for index in 0..self.config.trials {
            let outcome = run_trial(&mut self.rng, observer)?;
            debug!(
                trial = index,
                card = outcome.final_card.value(),
                position = outcome.position,
                stop = ?outcome.stop,
                wins = outcome.wins,
                "trial finished"
            );
            tally.record_outcome(&outcome);
        }

        info!(
            net = tally.net(),
            wins = tally.wins,
            losses = tally.losses,
            win_rate = tally.win_rate(),
            std_error = tally.std_error(),
            "experiment finished"
        );
        Ok(tally)
    }
}
