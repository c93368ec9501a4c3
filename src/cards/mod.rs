//! Cards and the deck they are drawn from.

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::{Deck, DECK_SIZE};
