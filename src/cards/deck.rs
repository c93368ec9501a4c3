//! The 52-card deck.
//!
//! A `Deck` always holds every identity in `0..DECK_SIZE` exactly once.
//! The only thing that varies between decks is the order.

use crate::core::SimRng;
use crate::error::{Result, SimError};

use super::card::Card;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// An ordered permutation of all card identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// The canonical order `0, 1, ..., 51`.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: std::array::from_fn(|i| Card::new(i as u8)),
        }
    }

    /// A uniformly shuffled deck drawn from `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut SimRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit order.
    ///
    /// Fails unless `order` is a permutation of `0..DECK_SIZE`.
    ///
    /// ```
    /// use excess_odds::cards::Deck;
    ///
    /// let reversed = Deck::from_order((0..52).rev()).unwrap();
    /// assert_eq!(reversed.top().value(), 51);
    ///
    /// assert!(Deck::from_order(0..51).is_err());
    /// ```
    pub fn from_order<I>(order: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut cards = [Card::new(0); DECK_SIZE];
        let mut seen = [false; DECK_SIZE];
        let mut len = 0usize;

        for value in order {
            if len == DECK_SIZE {
                return Err(SimError::InvalidDeck(format!(
                    "more than {DECK_SIZE} cards"
                )));
            }
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                SimError::InvalidDeck(format!("card {value} out of range 0..{DECK_SIZE}"))
            })?;
            if *slot {
                return Err(SimError::InvalidDeck(format!("card {value} appears twice")));
            }
            *slot = true;
            cards[len] = Card::new(value);
            len += 1;
        }

        if len != DECK_SIZE {
            return Err(SimError::InvalidDeck(format!(
                "expected {DECK_SIZE} cards, got {len}"
            )));
        }

        Ok(Self { cards })
    }

    /// Build a deck that starts with `prefix` and continues with the
    /// remaining cards in ascending order.
    ///
    /// Handy for setting up a specific opening without listing all 52 cards.
    pub fn with_prefix(prefix: &[u8]) -> Result<Self> {
        let mut used = [false; DECK_SIZE];
        for &value in prefix {
            if let Some(slot) = used.get_mut(value as usize) {
                *slot = true;
            }
        }
        let rest = (0..DECK_SIZE as u8).filter(|v| !used[*v as usize]);
        Self::from_order(prefix.iter().copied().chain(rest))
    }

    /// Cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card drawn.
    #[must_use]
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// The last card drawn.
    #[must_use]
    pub fn bottom(&self) -> Card {
        self.cards[DECK_SIZE - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
