//! Hand management errors.
//!
//! Errors raised by hand-keyed operations. Transfer refusals are not errors
//! and never appear here.

use crate::error::{ErrorSeverity, GameError};
use crate::inventory::InventoryError;
use crate::state::HandId;

/// Errors that occur during hand set operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandError {
    /// A hand with this identifier already exists.
    #[error("Hand '{hand}' already exists")]
    DuplicateHand { hand: HandId },

    /// No hand with this identifier exists.
    #[error("Unknown hand '{hand}'")]
    UnknownHand { hand: HandId },

    /// The operation needs at least one hand.
    #[error("Actor has no hands")]
    NoHands,

    /// Hand list is full (max capacity reached).
    #[error("Hand list is full (max: {max})")]
    HandListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// The inventory could not allocate a backing slot for the hand.
    #[error("Failed to allocate backing slot for hand '{hand}': {source}")]
    SlotAllocation {
        hand: HandId,
        #[source]
        source: InventoryError,
    },
}

impl HandError {
    pub(crate) fn unknown(hand: &str) -> Self {
        Self::UnknownHand {
            hand: HandId::from(hand),
        }
    }
}

impl GameError for HandError {
    fn severity(&self) -> ErrorSeverity {
        use HandError::*;
        match self {
            // Setup errors indicate broken content; abort initialization
            DuplicateHand { .. } | HandListFull { .. } => ErrorSeverity::Validation,

            // Stale or adversarial input; callers at the input boundary ignore these
            UnknownHand { .. } | NoHands => ErrorSeverity::Recoverable,

            SlotAllocation { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use HandError::*;
        match self {
            DuplicateHand { .. } => "HAND_DUPLICATE",
            UnknownHand { .. } => "HAND_UNKNOWN",
            NoHands => "HAND_NONE",
            HandListFull { .. } => "HAND_LIST_FULL",
            SlotAllocation { .. } => "HAND_SLOT_ALLOCATION",
        }
    }
}
