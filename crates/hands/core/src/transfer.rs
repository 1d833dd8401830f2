//! Moving items into and out of hands.
//!
//! Every operation is two-tiered: a side-effect free capability check against
//! the backing slot, then the delegated mutation. Callers can always probe
//! [`HandSet::can_place`] or [`HandSet::can_take`] before committing.
//!
//! Refusals are ordinary results (`Ok(false)` / `Ok(None)`). Only hand-keyed
//! failures (unknown hand, no hands at all) are errors.

use crate::inventory::SlotInventory;
use crate::state::{HandError, HandId, HandSet, HandSlot, ItemHandle};

impl HandSet {
    /// Returns whether `hand`'s backing slot would accept `item`.
    pub fn can_place<I>(&self, inventory: &I, item: ItemHandle, hand: &str) -> Result<bool, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let hand = self.hand(hand)?;
        Ok(inventory.can_insert(hand.slot, item))
    }

    /// Returns whether any hand would accept `item`, probing in priority order.
    pub fn can_place_any<I>(&self, inventory: &I, item: ItemHandle) -> Result<bool, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        if self.is_empty() {
            return Err(HandError::NoHands);
        }
        Ok(self
            .priority_order()
            .any(|hand| inventory.can_insert(hand.slot, item)))
    }

    /// Places `item` into `hand`.
    ///
    /// If the hand refuses and `allow_fallback` is set, the item goes to the
    /// first hand in priority order that accepts it. Returns the hand that
    /// received the item, or `None` if the placement was refused.
    pub fn place<I>(
        &self,
        inventory: &mut I,
        item: ItemHandle,
        hand: &str,
        allow_fallback: bool,
    ) -> Result<Option<HandId>, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let target = self.hand(hand)?;
        if inventory.can_insert(target.slot, item) {
            return Ok(Self::insert_into(inventory, target, item));
        }

        if allow_fallback {
            tracing::debug!("Hand '{}' refused {}, searching other hands", target.id, item);
            return self.place_any(inventory, item);
        }
        Ok(None)
    }

    /// Places `item` into the first hand, in priority order, that accepts it.
    pub fn place_any<I>(&self, inventory: &mut I, item: ItemHandle) -> Result<Option<HandId>, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        if self.is_empty() {
            return Err(HandError::NoHands);
        }

        for hand in self.priority_order() {
            if !inventory.can_insert(hand.slot, item) {
                continue;
            }
            if let Some(placed) = Self::insert_into(inventory, hand, item) {
                return Ok(Some(placed));
            }
        }
        Ok(None)
    }

    /// Returns whether `hand` holds an item that its slot allows removing.
    pub fn can_take<I>(&self, inventory: &I, hand: &str) -> Result<bool, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let hand = self.hand(hand)?;
        Ok(inventory.current_item(hand.slot).is_some() && inventory.can_remove(hand.slot))
    }

    /// Removes the item held in `hand`.
    ///
    /// Returns the removed item, or `None` if the hand is empty or the item
    /// cannot be removed.
    pub fn take<I>(&self, inventory: &mut I, hand: &str) -> Result<Option<ItemHandle>, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        if !self.can_take(&*inventory, hand)? {
            return Ok(None);
        }
        let hand = self.hand(hand)?;
        let removed = inventory.remove(hand.slot);
        match removed {
            Some(item) => tracing::debug!("Took {} from hand '{}'", item, hand.id),
            None => tracing::debug!("Slot for hand '{}' refused removal after check", hand.id),
        }
        Ok(removed)
    }

    /// Items currently held, paired with their hands, in insertion order.
    ///
    /// Reads live inventory state; call again to observe later changes.
    pub fn items_held<'a, I>(
        &'a self,
        inventory: &'a I,
    ) -> impl Iterator<Item = (&'a HandId, ItemHandle)> + 'a
    where
        I: SlotInventory + ?Sized,
    {
        self.slots()
            .iter()
            .filter_map(move |hand| inventory.current_item(hand.slot).map(|item| (&hand.id, item)))
    }

    /// The item held in `hand`, if any.
    pub fn item_in<I>(&self, inventory: &I, hand: &str) -> Result<Option<ItemHandle>, HandError>
    where
        I: SlotInventory + ?Sized,
    {
        let hand = self.hand(hand)?;
        Ok(inventory.current_item(hand.slot))
    }

    /// The hand holding `item`, if any hand does.
    pub fn find_hand_holding<'a, I>(&'a self, inventory: &'a I, item: ItemHandle) -> Option<&'a HandId>
    where
        I: SlotInventory + ?Sized,
    {
        self.items_held(inventory)
            .find(|&(_, held)| held == item)
            .map(|(hand, _)| hand)
    }

    fn insert_into<I>(inventory: &mut I, hand: &HandSlot, item: ItemHandle) -> Option<HandId>
    where
        I: SlotInventory + ?Sized,
    {
        if inventory.insert(hand.slot, item) {
            tracing::debug!("Placed {} in hand '{}'", item, hand.id);
            Some(hand.id.clone())
        } else {
            tracing::debug!("Slot for hand '{}' refused {} after check", hand.id, item);
            None
        }
    }
}
