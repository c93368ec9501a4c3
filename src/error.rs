//! Error type shared by the library.

use thiserror::Error;

/// Errors raised while building decks or reporting draws.
#[derive(Debug, Error)]
pub enum SimError {
    /// An explicit card order was not a permutation of the full deck.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// Writing diagnostics failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
