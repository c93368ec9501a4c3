//! Core run infrastructure: the seeded random source and configuration.

pub mod config;
pub mod rng;

pub use config::{ExperimentConfig, DEFAULT_TRIALS};
pub use rng::{SimRng, SimRngState};
