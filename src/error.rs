//! Error types for shoe and participant operations.

use thiserror::Error;

/// Errors that can occur while drawing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action code is neither stand (0) nor hit (1).
    #[error("invalid action {0}, expected 0 (stand) or 1 (hit)")]
    InvalidAction(u8),
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors in shoe configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one full deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
}
