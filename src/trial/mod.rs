//! A single trial of the excess-odds stopping rule.
//!
//! ## Rule
//!
//! Shuffle a fresh deck and turn cards over one at a time, keeping a
//! running balance of odd cards minus even cards. As soon as a card is
//! turned while the balance is above `STOP_THRESHOLD`, the trial ends on
//! that card. If that never happens, the trial ends on the last card.
//! The trial is won when the card it ends on is even.
//!
//! The stopping check runs on the last card as well. When it does not
//! fire there, the last card still updates the balance before the trial
//! falls through to that same card's parity.
//!
//! ## Usage
//!
//! ```
//! use excess_odds::cards::Deck;
//! use excess_odds::trial::{play, Silent, Stop};
//!
//! let deck = Deck::with_prefix(&[1, 3, 5, 0]).unwrap();
//! let outcome = play(&deck, &mut Silent).unwrap();
//!
//! assert!(outcome.wins);
//! assert_eq!(outcome.stop, Stop::Triggered);
//! assert_eq!(outcome.cards_examined, 4);
//! ```

pub mod draws;
pub mod observer;

pub use draws::{Draw, Draws, STOP_THRESHOLD};
pub use observer::{DrawObserver, DrawPrinter, Recorder, Silent};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::SimRng;
use crate::error::Result;

/// How a trial ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stop {
    /// The balance was above the threshold when the final card was turned.
    Triggered,
    /// The deck ran out; the final card is the last one in the deck.
    Exhausted,
}

/// Result of one trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// True when the final card is even.
    pub wins: bool,

    /// The card the trial ended on.
    pub final_card: Card,

    /// 0-based position of `final_card` in the deck.
    pub position: usize,

    /// Number of cards turned over, including the final one.
    pub cards_examined: usize,

    pub stop: Stop,

    /// Running balance when the trial ended.
    pub excess_odds: i32,
}

/// Play the stopping rule over an already-ordered deck.
///
/// Every examined card is passed to `observer` before the stopping check.
/// Only observer failures can make this return an error.
pub fn play<O: DrawObserver + ?Sized>(deck: &Deck, observer: &mut O) -> Result<TrialOutcome> {
    let mut draws = Draws::new(deck);
    let mut last = Draw {
        position: 0,
        card: deck.top(),
        excess_odds: 0,
    };
    let mut cards_examined = 0;

    for draw in draws.by_ref() {
        observer.on_draw(&draw)?;
        last = draw;
        cards_examined += 1;
    }

    let stop = if draws.stopped() {
        Stop::Triggered
    } else {
        Stop::Exhausted
    };

    Ok(TrialOutcome {
        wins: last.card.is_even(),
        final_card: last.card,
        position: last.position,
        cards_examined,
        stop,
        excess_odds: draws.excess_odds(),
    })
}

/// Shuffle a fresh deck from `rng` and play one trial on it.
pub fn run_trial<O: DrawObserver + ?Sized>(
    rng: &mut SimRng,
    observer: &mut O,
) -> Result<TrialOutcome> {
    let deck = Deck::shuffled(rng);
    play(&deck, observer)
}
