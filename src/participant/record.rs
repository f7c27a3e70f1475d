//! Player actions and trajectory records.

use core::fmt;

use crate::error::ActionError;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Keep the current hand.
    Stand = 0,
    /// Draw one more card.
    Hit = 1,
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Stand),
            1 => Ok(Self::Hit),
            other => Err(ActionError::InvalidAction(other)),
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action as Self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stand => f.pad("stand"),
            Self::Hit => f.pad("hit"),
        }
    }
}

/// One entry of a player's trajectory log.
///
/// `total` and `usable_ace` describe the hand before the action, `new_total`
/// after it. `reward` is 0 when logged and is filled in by whoever scores the
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,
    /// Hand total before the action.
    pub total: u16,
    /// Whether the hand was soft before the action.
    pub usable_ace: bool,
    /// Hand total after the action.
    pub new_total: u16,
    /// Reward assigned to the action.
    pub reward: i32,
}

impl ActionRecord {
    /// Returns the record with `reward` set.
    #[must_use]
    pub const fn with_reward(mut self, reward: i32) -> Self {
        self.reward = reward;
        self
    }
}
