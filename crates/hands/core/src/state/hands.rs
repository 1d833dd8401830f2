//! Ordered hand arena and active-hand selection.
//!
//! Hands live in a single insertion-ordered arena. The active hand is stored
//! as an index into that arena, so it can only ever name a current hand.

use arrayvec::ArrayVec;

use crate::config::{HandLayout, HandsConfig};
use crate::inventory::SlotInventory;
use crate::state::{HandError, HandId, SlotKey, SlotName};

/// A hand and the backing inventory slot it delegates storage to.
///
/// The slot itself is owned by the inventory; the hand only references it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandSlot {
    pub id: HandId,
    pub slot_name: SlotName,
    pub slot: SlotKey,
}

/// The hands owned by one actor.
///
/// # Invariants
///
/// - Hand identifiers are unique.
/// - `active` is `None` iff there are no hands, otherwise it indexes a hand.
/// - Arena order is insertion order; it defines cycling order and the
///   fallback when the active hand is removed.
/// - Each backing slot is referenced by exactly one hand set, so the type is
///   neither `Clone` nor deserializable. Replicate state with
///   [`HandsSnapshot`](crate::HandsSnapshot) instead.
///
/// ```compile_fail
/// let hands = hands_core::HandSet::new();
/// let copy = hands.clone();
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HandSet {
    slots: ArrayVec<HandSlot, { HandsConfig::MAX_HANDS }>,
    active: Option<usize>,
}

impl HandSet {
    /// Creates an empty hand set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hand set from a configured layout, adding hands in order.
    ///
    /// Any error aborts construction. Slots allocated before the failure are
    /// released again so the inventory is left as it was.
    pub fn from_layout<I>(layout: &HandLayout, inventory: &mut I) -> Result<Self, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let mut hands = Self::new();
        for hand in &layout.hands {
            if let Err(error) = hands.add_hand(inventory, hand.clone()) {
                hands.release_all(inventory);
                return Err(error);
            }
        }
        Ok(hands)
    }

    /// Adds a hand, allocating its backing slot.
    ///
    /// The first hand added to an empty set becomes active.
    pub fn add_hand<I>(&mut self, inventory: &mut I, id: impl Into<HandId>) -> Result<(), HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let id = id.into();
        if self.has_hand(id.as_str()) {
            return Err(HandError::DuplicateHand { hand: id });
        }
        if self.slots.is_full() {
            return Err(HandError::HandListFull {
                max: HandsConfig::MAX_HANDS,
            });
        }

        let slot_name = SlotName::for_hand(&id);
        let slot = inventory
            .allocate_slot(&slot_name)
            .map_err(|source| HandError::SlotAllocation {
                hand: id.clone(),
                source,
            })?;

        tracing::debug!("Added hand '{}' backed by slot {} ({:?})", id, slot_name, slot);
        self.slots.push(HandSlot {
            id,
            slot_name,
            slot,
        });
        if self.active.is_none() {
            self.active = Some(self.slots.len() - 1);
        }
        Ok(())
    }

    /// Removes a hand and releases its backing slot.
    ///
    /// Whatever the hand held is left to the inventory to relocate or drop.
    /// If the active hand is removed, the first remaining hand becomes active.
    pub fn remove_hand<I>(&mut self, inventory: &mut I, id: &str) -> Result<(), HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let index = self.index_of(id).ok_or_else(|| HandError::unknown(id))?;
        let removed = self.slots.remove(index);

        if let Some(item) = inventory.current_item(removed.slot) {
            tracing::warn!(
                "Releasing hand '{}' while it still holds {}",
                removed.id,
                item
            );
        }
        inventory.release_slot(removed.slot);

        self.active = match self.active {
            _ if self.slots.is_empty() => None,
            Some(active) if active == index => Some(0),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        tracing::debug!(
            "Removed hand '{}', active hand is now {:?}",
            removed.id,
            self.active_hand().map(HandId::as_str)
        );
        Ok(())
    }

    /// Makes `id` the active hand. Items are not touched.
    pub fn set_active(&mut self, id: &str) -> Result<(), HandError> {
        let index = self.index_of(id).ok_or_else(|| HandError::unknown(id))?;
        self.active = Some(index);
        Ok(())
    }

    /// Advances the active hand to the next hand in insertion order, wrapping
    /// around after the last one. Returns the new active hand.
    pub fn cycle_active(&mut self) -> Result<&HandId, HandError> {
        if self.slots.is_empty() {
            return Err(HandError::NoHands);
        }
        let next = match self.active {
            Some(active) => (active + 1) % self.slots.len(),
            None => 0,
        };
        self.active = Some(next);
        Ok(&self.slots[next].id)
    }

    /// Releases every backing slot and empties the set.
    ///
    /// Called when the owning actor's component is destroyed.
    pub fn release_all<I>(&mut self, inventory: &mut I)
    where
        I: SlotInventory + ?Sized,
    {
        for hand in self.slots.drain(..) {
            inventory.release_slot(hand.slot);
        }
        self.active = None;
    }

    pub fn has_hand(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Hand identifiers in insertion order.
    pub fn hands(&self) -> impl ExactSizeIterator<Item = &HandId> {
        self.slots.iter().map(|hand| &hand.id)
    }

    /// Hand records in insertion order.
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    pub fn active_hand(&self) -> Option<&HandId> {
        self.active.map(|index| &self.slots[index].id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Hands in priority order: the active hand first, then every other hand
    /// in insertion order. Each hand is visited exactly once.
    pub fn priority_order(&self) -> impl Iterator<Item = &HandSlot> {
        let active = self.active;
        active
            .into_iter()
            .chain((0..self.slots.len()).filter(move |&index| Some(index) != active))
            .map(move |index| &self.slots[index])
    }

    pub(crate) fn hand(&self, id: &str) -> Result<&HandSlot, HandError> {
        self.slots
            .iter()
            .find(|hand| hand.id.as_str() == id)
            .ok_or_else(|| HandError::unknown(id))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|hand| hand.id.as_str() == id)
    }
}
