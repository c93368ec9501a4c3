//! Lazy walk over a shuffled deck under the excess-odds stopping rule.
//!
//! `Draws` yields one `Draw` per examined card, carrying the running
//! balance as it stood *before* that card. The walk ends either when the
//! deck runs out or right after yielding the card on which the balance
//! was already above `STOP_THRESHOLD`. That card's parity is never added
//! to the balance.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};

/// The walk stops on the first card seen while the balance is above this.
pub const STOP_THRESHOLD: i32 = 2;

/// One examined card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// 0-based position in the deck.
    pub position: usize,

    /// The card at that position.
    pub card: Card,

    /// Running balance before this card was examined.
    pub excess_odds: i32,
}

impl Draw {
    /// Whether the stopping rule fires on this card.
    #[must_use]
    pub fn triggers_stop(&self) -> bool {
        self.excess_odds > STOP_THRESHOLD
    }
}

/// Iterator over the draws of a single trial.
///
/// Not restartable: build a new one from the deck to walk it again.
#[derive(Debug)]
pub struct Draws<'a> {
    cards: std::iter::Enumerate<std::slice::Iter<'a, Card>>,
    excess_odds: i32,
    stopped: bool,
}

impl<'a> Draws<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self {
            cards: deck.cards().iter().enumerate(),
            excess_odds: 0,
            stopped: false,
        }
    }

    /// Current running balance.
    #[must_use]
    pub fn excess_odds(&self) -> i32 {
        self.excess_odds
    }

    /// Whether the stopping rule has fired.
    #[must_use]
    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

impl Iterator for Draws<'_> {
    type Item = Draw;

    fn next(&mut self) -> Option<Draw> {
        if self.stopped {
            return None;
        }
        let (position, &card) = self.cards.next()?;
        let draw = Draw {
            position,
            card,
            excess_odds: self.excess_odds,
        };

        if draw.triggers_stop() {
            self.stopped = true;
        } else {
            self.excess_odds += card.balance_step();
        }

        Some(draw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stopped {
            (0, Some(0))
        } else {
            let remaining = self.cards.len();
            (remaining.min(1), Some(remaining))
        }
    }
}

impl FusedIterator for Draws<'_> {}
