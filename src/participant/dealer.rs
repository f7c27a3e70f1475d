use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::CardSource;

use super::{Participant, ParticipantState, Seat};

/// Total at which the dealer stops drawing.
pub const DEALER_STAND_TOTAL: u16 = 17;

/// The house participant, playing a fixed stand-on-17 policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    seat: Seat,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the face-up card (the first card drawn).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.seat.hand.first_card()
    }

    /// Returns the point value of the up-card alone.
    ///
    /// An ace up-card shows its first value, 1. Returns `None` while the hand
    /// is empty.
    #[must_use]
    pub fn partial_total(&self) -> Option<u8> {
        self.up_card().map(|card| card.rank.value())
    }

    /// Plays out the hand: hits while the total is below 17, then stands.
    ///
    /// Soft 17 stands like any other 17. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the source runs out of cards. Cards drawn before
    /// that stay in the hand.
    pub fn play<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Vec<Card>, ShoeError> {
        let mut drawn = Vec::new();

        while self.seat.hand.total() < DEALER_STAND_TOTAL {
            drawn.push(self.seat.hit(source)?);
        }
        self.seat.stand();

        debug!(
            total = self.seat.hand.total(),
            drawn = drawn.len(),
            "dealer stands"
        );
        Ok(drawn)
    }

    /// Returns a view that shows only the up-card.
    #[must_use]
    pub const fn partial(&self) -> PartialView<'_> {
        PartialView { dealer: self }
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.seat.hand
    }

    fn state(&self) -> ParticipantState {
        self.seat.state
    }

    fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ShoeError> {
        self.seat.hit(source)
    }

    fn stand(&mut self) {
        self.seat.stand();
    }

    fn clear_hand(&mut self) {
        self.seat.clear_hand();
    }

    fn start_round(&mut self) {
        self.seat.start_round();
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Total: {}", self.seat.hand, self.seat.hand.total())
    }
}

/// The dealer's hand as the table sees it before the hole card is turned.
#[derive(Debug, Clone, Copy)]
pub struct PartialView<'a> {
    dealer: &'a Dealer,
}

impl fmt::Display for PartialView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.dealer.up_card(), self.dealer.partial_total()) {
            (Some(card), Some(value)) => write!(f, "{card} - Total: +{value}"),
            _ => f.write_str("(no cards)"),
        }
    }
}
