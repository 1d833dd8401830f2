//! Replicated view of hand occupancy.
//!
//! A [`HandsSnapshot`] is built fresh from live state on every replication
//! cycle and never cached. Occupied hands are keyed in a sorted map, so two
//! snapshots of the same state compare equal and hash to the same digest.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::inventory::SlotInventory;
use crate::state::{HandId, HandSet, ItemHandle};

/// Which item occupies which hand, plus the active hand.
///
/// Empty hands are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandsSnapshot {
    pub held: BTreeMap<HandId, ItemHandle>,
    pub active: Option<HandId>,
}

impl HandsSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if no hand holds anything and no hand is active.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.active.is_none()
    }

    pub fn item_in(&self, hand: &str) -> Option<ItemHandle> {
        self.held.get(hand).copied()
    }

    /// SHA-256 over a canonical byte layout of the snapshot.
    ///
    /// Layout: active-hand tag (0 or 1) and length-prefixed name, then each
    /// occupied hand in key order as a length-prefixed name followed by the
    /// little-endian item handle.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        match &self.active {
            Some(hand) => {
                hasher.update([1u8]);
                update_str(&mut hasher, hand.as_str());
            }
            None => hasher.update([0u8]),
        }

        hasher.update((self.held.len() as u32).to_le_bytes());
        for (hand, item) in &self.held {
            update_str(&mut hasher, hand.as_str());
            hasher.update(item.0.to_le_bytes());
        }

        hasher.finalize().into()
    }

    /// Serializes the snapshot into an opaque transport payload.
    #[cfg(feature = "serde")]
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restores a snapshot from a payload produced by [`HandsSnapshot::encode`].
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u32).to_le_bytes());
    hasher.update(value.as_bytes());
}

impl HandSet {
    /// Builds a snapshot from current hand and inventory state.
    pub fn snapshot<I>(&self, inventory: &I) -> HandsSnapshot
    where
        I: SlotInventory + ?Sized,
    {
        HandsSnapshot {
            held: self
                .items_held(inventory)
                .map(|(hand, item)| (hand.clone(), item))
                .collect(),
            active: self.active_hand().cloned(),
        }
    }
}
