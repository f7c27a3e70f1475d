//! A blackjack game-state engine with optional `no_std` support.
//!
//! The crate models a shuffled multi-deck [`Shoe`], [`Hand`] valuation with
//! the soft-ace rule, and two participants: a [`Dealer`] that stands on 17
//! and a [`Player`] driven by external actions that logs a trajectory of
//! [`ActionRecord`]s for later scoring or learning.
//!
//! Turn order, scoring and payouts are left to the caller.
//!
//! # Example
//!
//! ```
//! use bjsim::{Dealer, Participant, Player, Shoe, ShoeOptions};
//!
//! let mut shoe = Shoe::new(ShoeOptions::default(), 42).unwrap();
//! let mut dealer = Dealer::new();
//! let mut player = Player::new();
//!
//! player.hit_with(&mut shoe, false).unwrap();
//! dealer.hit(&mut shoe).unwrap();
//!
//! while player.is_playing() {
//!     let action = u8::from(player.hand().total() < 17);
//!     player.play(&mut shoe, action).unwrap();
//! }
//! dealer.play(&mut shoe).unwrap();
//! assert!(!player.actions().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, ConfigError, ShoeError};
pub use hand::Hand;
pub use options::ShoeOptions;
pub use participant::{
    Action, ActionRecord, DEALER_STAND_TOTAL, Dealer, PartialView, Participant,
    ParticipantState, Player, STOP_TOTAL,
};
pub use shoe::{CardSource, SharedShoe, Shoe};
