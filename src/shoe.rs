//! The shoe: a shuffled multi-deck source of cards.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{ConfigError, ShoeError};
use crate::options::ShoeOptions;
use crate::sync::Mutex;

/// Anything participants can draw cards from.
///
/// [`Shoe`] is the usual source. Drivers and tests can supply their own
/// sources to script the order of cards.
pub trait CardSource {
    /// Removes and returns one card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] when no card is left.
    fn draw(&mut self) -> Result<Card, ShoeError>;
}

/// A shuffled collection of one or more full decks.
///
/// The shoe only shrinks through [`Shoe::draw`] until [`Shoe::reset`] rebuilds
/// it at full size.
///
/// # Example
///
/// ```
/// use bjsim::{Shoe, ShoeOptions};
///
/// let mut shoe = Shoe::new(ShoeOptions::default(), 42).unwrap();
/// assert_eq!(shoe.len(), 312);
/// shoe.draw().unwrap();
/// assert_eq!(shoe.len(), 311);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    options: ShoeOptions,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid (for example zero decks).
    pub fn new(options: ShoeOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut shoe = Self {
            cards: Vec::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.fill();
        Ok(shoe)
    }

    /// Rebuilds every deck in catalog order and shuffles.
    fn fill(&mut self) {
        let decks = self.options.decks as usize;
        self.cards.clear();
        self.cards.reserve(decks * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.shuffle();
        debug!(decks, cards = self.cards.len(), "shoe filled");
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns one card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty. The caller must
    /// [`reset`](Self::reset) or replace the shoe.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let Some(card) = self.cards.pop() else {
            warn!(decks = self.options.decks, "draw from exhausted shoe");
            return Err(ShoeError::Exhausted);
        };
        trace!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Discards the remaining cards and rebuilds a full, shuffled shoe.
    pub fn reset(&mut self) {
        debug!(discarded = self.cards.len(), "shoe reset");
        self.fill();
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.options.decks as usize * DECK_SIZE
    }

    /// Returns the number of decks.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.options.decks
    }

    /// Returns the remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Result<Card, ShoeError> {
        Self::draw(self)
    }
}

/// A shoe behind a mutex, for drivers that draw from several threads.
///
/// Draws through a shared reference: `&SharedShoe` is a [`CardSource`].
#[derive(Debug)]
pub struct SharedShoe {
    inner: Mutex<Shoe>,
}

impl SharedShoe {
    /// Wraps a shoe.
    #[must_use]
    pub const fn new(shoe: Shoe) -> Self {
        Self {
            inner: Mutex::new(shoe),
        }
    }

    /// Removes and returns one card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw(&self) -> Result<Card, ShoeError> {
        self.inner.lock().draw()
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&self) {
        self.inner.lock().shuffle();
    }

    /// Rebuilds a full, shuffled shoe.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Returns the number of cards remaining.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns whether no cards remain.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the wrapped shoe.
    pub fn into_inner(self) -> Shoe {
        self.inner.into_inner()
    }
}

impl CardSource for &SharedShoe {
    fn draw(&mut self) -> Result<Card, ShoeError> {
        SharedShoe::draw(*self)
    }
}
