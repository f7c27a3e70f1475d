use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::{ActionError, ShoeError};
use crate::hand::Hand;
use crate::shoe::CardSource;

use super::record::{Action, ActionRecord};
use super::{Participant, ParticipantState, Seat};

/// An action-driven participant that logs every decision it makes.
///
/// ```
/// use bjsim::{Participant, Player, Shoe, ShoeOptions};
///
/// let mut shoe = Shoe::new(ShoeOptions::default(), 7).unwrap();
/// let mut player = Player::new();
/// player.play(&mut shoe, 1).unwrap();
/// if player.is_playing() {
///     player.play(&mut shoe, 0).unwrap();
/// }
/// assert!(!player.actions().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    /// Trajectory log, oldest first.
    actions: Vec<ActionRecord>,
}

impl Player {
    /// Creates a player with an empty hand and an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one card, logging the hit unless `save_action` is false.
    ///
    /// Unlogged hits are meant for moves that should not count towards the
    /// trajectory, such as dealing the opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no cards left. Nothing is logged in
    /// that case.
    pub fn hit_with<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
        save_action: bool,
    ) -> Result<Card, ShoeError> {
        let total = self.seat.hand.total();
        let usable_ace = self.seat.hand.usable_ace();

        let card = self.seat.hit(source)?;

        if save_action {
            self.actions.push(ActionRecord {
                action: Action::Hit,
                total,
                usable_ace,
                new_total: self.seat.hand.total(),
                reward: 0,
            });
        }
        Ok(card)
    }

    /// Applies a decoded action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is a hit and the source is empty.
    pub fn act<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
        action: Action,
    ) -> Result<(), ShoeError> {
        match action {
            Action::Hit => self.hit_with(source, true).map(|_| ()),
            Action::Stand => {
                self.stand();
                Ok(())
            }
        }
    }

    /// Advances the player's turn with an action code: 1 hits, 0 stands.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] for any other code, leaving the
    /// hand and log untouched, or [`ActionError::Shoe`] if a hit finds the
    /// source empty.
    pub fn play<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
        action: u8,
    ) -> Result<(), ActionError> {
        let action = Action::try_from(action).inspect_err(|err| {
            warn!(?err, total = self.seat.hand.total(), "player action rejected");
        })?;
        self.act(source, action)?;
        Ok(())
    }

    /// Returns the trajectory log, oldest first.
    #[must_use]
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Removes and returns the whole trajectory log.
    pub fn take_actions(&mut self) -> Vec<ActionRecord> {
        core::mem::take(&mut self.actions)
    }

    /// Stamps `reward` on every logged action.
    pub fn assign_reward(&mut self, reward: i32) {
        for record in &mut self.actions {
            *record = record.with_reward(reward);
        }
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.seat.hand
    }

    fn state(&self) -> ParticipantState {
        self.seat.state
    }

    /// Draws one card and logs the hit.
    fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ShoeError> {
        self.hit_with(source, true)
    }

    /// Stops the player and logs the stand with an unchanged total.
    fn stand(&mut self) {
        self.seat.stand();

        let total = self.seat.hand.total();
        self.actions.push(ActionRecord {
            action: Action::Stand,
            total,
            usable_ace: self.seat.hand.usable_ace(),
            new_total: total,
            reward: 0,
        });
        debug!(total, logged = self.actions.len(), "player stands");
    }

    fn clear_hand(&mut self) {
        self.seat.clear_hand();
    }

    /// Clears the hand and resumes playing. The trajectory log is kept; drain
    /// it with [`Player::take_actions`].
    fn start_round(&mut self) {
        self.seat.start_round();
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Total: {}", self.seat.hand, self.seat.hand.total())
    }
}
