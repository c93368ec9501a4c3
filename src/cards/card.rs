//! Card identities.
//!
//! Only parity matters to the stopping rule; suit and rank are not modeled.

use serde::{Deserialize, Serialize};

/// A card identity in `0..DECK_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Create a card from its identity.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw identity.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    #[must_use]
    pub const fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Change this card applies to the running balance: +1 odd, -1 even.
    #[must_use]
    pub const fn balance_step(self) -> i32 {
        if self.is_odd() {
            1
        } else {
            -1
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
