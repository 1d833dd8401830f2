//! Input-driven hand transitions.
//!
//! Player key bindings and remote requests arrive as [`HandInput`] values and
//! are resolved by a single exhaustive match in [`HandSet::handle_input`].
//! Input is untrusted and may be stale: nothing here returns an error, and
//! anything that cannot be applied is reported as [`InputOutcome::Ignored`].

use crate::inventory::SlotInventory;
use crate::state::{HandId, HandSet, ItemHandle};

/// Stimuli the hand subsystem reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandInput {
    /// "Switch hands" pressed: cycle the active hand.
    SwitchHands,
    /// "Drop" pressed: take whatever the active hand holds.
    Drop,
    /// A remote client asked for a specific active hand.
    RemoteSetActive(HandId),
}

/// Key-bindable actions, parsed from binding names such as `switch_hands`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundAction {
    SwitchHands,
    Drop,
}

impl From<BoundAction> for HandInput {
    fn from(action: BoundAction) -> Self {
        match action {
            BoundAction::SwitchHands => HandInput::SwitchHands,
            BoundAction::Drop => HandInput::Drop,
        }
    }
}

/// What an input did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The active hand changed (or was re-selected).
    ActiveChanged(HandId),
    /// An item was removed from the given hand.
    Dropped(HandId, ItemHandle),
    /// Nothing happened.
    Ignored,
}

impl HandSet {
    /// Applies an input. Never fails; inapplicable input is ignored.
    pub fn handle_input<I>(&mut self, inventory: &mut I, input: HandInput) -> InputOutcome
    where
        I: SlotInventory + ?Sized,
    {
        match input {
            HandInput::SwitchHands => match self.cycle_active() {
                Ok(hand) => InputOutcome::ActiveChanged(hand.clone()),
                Err(error) => {
                    tracing::debug!("Ignoring switch-hands input: {}", error);
                    InputOutcome::Ignored
                }
            },
            HandInput::Drop => {
                let Some(active) = self.active_hand().cloned() else {
                    return InputOutcome::Ignored;
                };
                match self.take(inventory, active.as_str()) {
                    Ok(Some(item)) => InputOutcome::Dropped(active, item),
                    Ok(None) => InputOutcome::Ignored,
                    Err(error) => {
                        tracing::debug!("Ignoring drop input: {}", error);
                        InputOutcome::Ignored
                    }
                }
            }
            HandInput::RemoteSetActive(hand) => {
                if !self.has_hand(hand.as_str()) {
                    tracing::debug!("Ignoring remote request for unknown hand '{}'", hand);
                    return InputOutcome::Ignored;
                }
                match self.set_active(hand.as_str()) {
                    Ok(()) => InputOutcome::ActiveChanged(hand),
                    Err(_) => InputOutcome::Ignored,
                }
            }
        }
    }
}
