//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest non-ace total at which one ace can still count as 11.
const SOFT_LIMIT: u16 = 10;

/// An ordered collection of drawn cards.
///
/// The ace count is kept up to date on every [`add_card`](Hand::add_card);
/// totals are derived from it.
///
/// ```
/// use bjsim::{Card, Hand, Rank, Suit};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
/// hand.add_card(Card::new(Suit::Clubs, Rank::Six));
/// assert_eq!(hand.total(), 17);
/// assert!(hand.usable_ace());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in add order.
    cards: Vec<Card>,
    /// Number of aces among `cards`.
    n_aces: u16,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            n_aces: 0,
        }
    }

    /// Adds a card to the hand and returns it.
    pub fn add_card(&mut self, card: Card) -> Card {
        self.cards.push(card);
        if card.rank.is_ace() {
            self.n_aces += 1;
        }
        card
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card drawn, if any.
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of aces in the hand.
    #[must_use]
    pub const fn n_aces(&self) -> u16 {
        self.n_aces
    }

    /// Sum of the point values of every non-ace card.
    #[must_use]
    pub fn total_without_ace(&self) -> u16 {
        self.cards
            .iter()
            .filter(|card| !card.rank.is_ace())
            .map(|card| u16::from(card.rank.value()))
            .sum()
    }

    /// Returns whether one ace counts as 11 (a soft hand).
    #[must_use]
    pub fn usable_ace(&self) -> bool {
        self.n_aces > 0 && self.total_without_ace() <= SOFT_LIMIT
    }

    /// Calculates the value of the hand.
    ///
    /// Every ace counts as 1, except the first one which counts as 11 while
    /// the hand is soft.
    #[must_use]
    pub fn total(&self) -> u16 {
        let base = self.total_without_ace();
        if self.n_aces == 0 {
            return base;
        }
        let first_ace = if base <= SOFT_LIMIT { 11 } else { 1 };
        base + (self.n_aces - 1) + first_ace
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
