//! # excess-odds
//!
//! Monte Carlo estimate of a card stopping rule: turn over a shuffled
//! 52-card deck, track how many more odd cards than even cards have gone
//! by, and stop on the first card turned once that excess is above two.
//! A trial is won when the card it stops on is even.
//!
//! ## Modules
//!
//! - `cards`: card identities and the 52-card deck
//! - `core`: seeded RNG and run configuration
//! - `trial`: the stopping rule for a single shuffled deck
//! - `experiment`: repeated trials and the signed win/loss tally
//! - `error`: crate error type

pub mod cards;
pub mod core;
pub mod error;
pub mod experiment;
pub mod trial;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, DECK_SIZE};
pub use crate::core::{ExperimentConfig, SimRng, SimRngState};
pub use crate::error::SimError;
pub use crate::experiment::{Experiment, Tally};
pub use crate::trial::{
    play, run_trial, Draw, DrawObserver, DrawPrinter, Draws, Recorder, Silent, Stop,
    TrialOutcome, STOP_THRESHOLD,
};
