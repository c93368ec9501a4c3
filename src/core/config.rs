//! Experiment configuration.

use serde::{Deserialize, Serialize};

use super::rng::SimRng;

/// Trials per run when nothing else is requested.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Run parameters for an experiment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of trials to run.
    pub trials: u32,

    /// Random seed. `None` draws a fresh seed from OS entropy.
    /// Same seed produces the same tally.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source this config asks for.
    #[must_use]
    pub fn rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExperimentConfig::new().with_trials(500).with_seed(123);

        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_serialization() {
        let config = ExperimentConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ExperimentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
