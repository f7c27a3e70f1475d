//! Dealer and player state machines.
//!
//! Both participants own one [`Hand`] and a [`ParticipantState`]. The engine
//! has no turn order of its own; a driver calls [`Participant::hit`] and
//! [`Participant::stand`] (or the participant's `play`) one turn at a time.

use tracing::trace;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::CardSource;

mod dealer;
mod player;
pub mod record;

pub use dealer::{DEALER_STAND_TOTAL, Dealer, PartialView};
pub use player::Player;
pub use record::{Action, ActionRecord};

/// Total at or above which a hit ends the participant's turn.
pub const STOP_TOTAL: u16 = 21;

/// Participant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticipantState {
    /// Still taking cards.
    #[default]
    Playing,
    /// Stood, reached 21 or busted.
    Stopped,
}

/// Behaviour shared by the dealer and the player.
///
/// The two `play` operations differ (the dealer follows a fixed policy, the
/// player takes an action) and live on the concrete types.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the current state.
    fn state(&self) -> ParticipantState;

    /// Returns whether the participant is still playing.
    fn is_playing(&self) -> bool {
        self.state() == ParticipantState::Playing
    }

    /// Draws one card into the hand.
    ///
    /// The participant stops once the hand total reaches 21 or more; both an
    /// exact 21 and a bust stop the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no cards left. The hand is left
    /// unchanged.
    fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ShoeError>;

    /// Stops the participant without drawing.
    fn stand(&mut self);

    /// Replaces the hand with a fresh empty one.
    ///
    /// The state is left as it is; use [`start_round`](Self::start_round) to
    /// also resume playing.
    fn clear_hand(&mut self);

    /// Clears the hand and sets the state back to playing.
    fn start_round(&mut self);
}

/// Hand and state shared by both participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Seat {
    hand: Hand,
    state: ParticipantState,
}

impl Seat {
    fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ShoeError> {
        let card = self.hand.add_card(source.draw()?);
        let total = self.hand.total();

        self.state = if total < STOP_TOTAL {
            ParticipantState::Playing
        } else {
            ParticipantState::Stopped
        };
        trace!(%card, total, state = ?self.state, "hit");

        Ok(card)
    }

    const fn stand(&mut self) {
        self.state = ParticipantState::Stopped;
    }

    fn clear_hand(&mut self) {
        self.hand = Hand::new();
    }

    fn start_round(&mut self) {
        self.clear_hand();
        self.state = ParticipantState::Playing;
    }
}
