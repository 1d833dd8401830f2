//! In-memory inventory used by the simulator and tests.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::config::HandsConfig;
use crate::inventory::{InventoryError, SlotInventory};
use crate::state::{ItemHandle, SlotKey, SlotName};

/// Item data the in-memory inventory needs to answer capability checks.
///
/// # Insert/remove rules
///
/// - An item fits a slot if `size <= slot size`
/// - An item is held by at most one slot at a time
/// - Anchored items (glued, bound, cursed) cannot be removed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub size: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub anchored: bool,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, size: u16) -> Self {
        Self {
            handle,
            size,
            anchored: false,
        }
    }

    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }
}

#[derive(Clone, Debug)]
struct MemorySlot {
    key: SlotKey,
    name: SlotName,
    item: Option<ItemHandle>,
}

/// Inventory holding single-item slots in memory.
#[derive(Clone, Debug)]
pub struct MemoryInventory {
    catalog: HashMap<ItemHandle, ItemDefinition>,
    slots: ArrayVec<MemorySlot, { HandsConfig::MAX_SLOTS }>,
    slot_size: u16,
    next_key: u32,
}

impl MemoryInventory {
    pub fn new(config: &HandsConfig) -> Self {
        Self {
            catalog: HashMap::new(),
            slots: ArrayVec::new(),
            slot_size: config.default_slot_size,
            next_key: 0,
        }
    }

    /// Creates an inventory that knows the given item definitions.
    pub fn with_items(config: &HandsConfig, items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut inventory = Self::new(config);
        for item in items {
            inventory.register(item);
        }
        inventory
    }

    /// Registers (or replaces) an item definition.
    pub fn register(&mut self, item: ItemDefinition) {
        self.catalog.insert(item.handle, item);
    }

    /// Marks an item as anchored or free. Returns false for unknown items.
    pub fn set_anchored(&mut self, item: ItemHandle, anchored: bool) -> bool {
        match self.catalog.get_mut(&item) {
            Some(definition) => {
                definition.anchored = anchored;
                true
            }
            None => false,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_named(&self, name: &str) -> Option<SlotKey> {
        self.slots
            .iter()
            .find(|slot| slot.name.as_str() == name)
            .map(|slot| slot.key)
    }

    /// Returns true if some slot currently holds `item`.
    pub fn is_held(&self, item: ItemHandle) -> bool {
        self.slots.iter().any(|slot| slot.item == Some(item))
    }

    fn slot(&self, key: SlotKey) -> Option<&MemorySlot> {
        self.slots.iter().find(|slot| slot.key == key)
    }

    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut MemorySlot> {
        self.slots.iter_mut().find(|slot| slot.key == key)
    }
}

impl Default for MemoryInventory {
    fn default() -> Self {
        Self::new(&HandsConfig::default())
    }
}

impl SlotInventory for MemoryInventory {
    fn allocate_slot(&mut self, name: &SlotName) -> Result<SlotKey, InventoryError> {
        if self.slot_named(name.as_str()).is_some() {
            return Err(InventoryError::SlotNameTaken { name: name.clone() });
        }
        if self.slots.is_full() {
            return Err(InventoryError::NoSlotsAvailable {
                max: HandsConfig::MAX_SLOTS,
            });
        }

        let key = SlotKey(self.next_key);
        self.next_key += 1;
        self.slots.push(MemorySlot {
            key,
            name: name.clone(),
            item: None,
        });
        Ok(key)
    }

    fn release_slot(&mut self, slot: SlotKey) {
        if let Some(index) = self.slots.iter().position(|entry| entry.key == slot) {
            let released = self.slots.remove(index);
            if let Some(item) = released.item {
                tracing::debug!("Slot {} released; dropping {}", released.name, item);
            }
        }
    }

    fn can_insert(&self, slot: SlotKey, item: ItemHandle) -> bool {
        let Some(entry) = self.slot(slot) else {
            return false;
        };
        let Some(definition) = self.catalog.get(&item) else {
            return false;
        };
        entry.item.is_none() && definition.size <= self.slot_size && !self.is_held(item)
    }

    fn insert(&mut self, slot: SlotKey, item: ItemHandle) -> bool {
        if !self.can_insert(slot, item) {
            return false;
        }
        match self.slot_mut(slot) {
            Some(entry) => {
                entry.item = Some(item);
                true
            }
            None => false,
        }
    }

    fn can_remove(&self, slot: SlotKey) -> bool {
        self.slot(slot)
            .and_then(|entry| entry.item)
            .and_then(|item| self.catalog.get(&item))
            .is_some_and(|definition| !definition.anchored)
    }

    fn remove(&mut self, slot: SlotKey) -> Option<ItemHandle> {
        if !self.can_remove(slot) {
            return None;
        }
        self.slot_mut(slot).and_then(|entry| entry.item.take())
    }

    fn current_item(&self, slot: SlotKey) -> Option<ItemHandle> {
        self.slot(slot).and_then(|entry| entry.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWORD: ItemHandle = ItemHandle(1);
    const BOULDER: ItemHandle = ItemHandle(2);

    fn inventory() -> (MemoryInventory, SlotKey) {
        let mut inventory = MemoryInventory::with_items(
            &HandsConfig::with_slot_size(3),
            [
                ItemDefinition::new(SWORD, 2),
                ItemDefinition::new(BOULDER, 10),
            ],
        );
        let slot = inventory.allocate_slot(&SlotName::new("hand:left")).unwrap();
        (inventory, slot)
    }

    #[test]
    fn oversized_items_do_not_fit() {
        let (inventory, slot) = inventory();
        assert!(inventory.can_insert(slot, SWORD));
        assert!(!inventory.can_insert(slot, BOULDER));
    }

    #[test]
    fn unknown_items_are_refused() {
        let (mut inventory, slot) = inventory();
        assert!(!inventory.insert(slot, ItemHandle(99)));
    }

    #[test]
    fn occupied_slot_refuses_second_item() {
        let (mut inventory, slot) = inventory();
        inventory.register(ItemDefinition::new(ItemHandle(3), 1));
        assert!(inventory.insert(slot, SWORD));
        assert!(!inventory.can_insert(slot, ItemHandle(3)));
    }

    #[test]
    fn item_cannot_be_held_twice() {
        let (mut inventory, left) = inventory();
        let right = inventory.allocate_slot(&SlotName::new("hand:right")).unwrap();
        assert!(inventory.insert(left, SWORD));
        assert!(!inventory.can_insert(right, SWORD));
    }

    #[test]
    fn anchored_item_cannot_be_removed() {
        let (mut inventory, slot) = inventory();
        assert!(inventory.insert(slot, SWORD));
        inventory.set_anchored(SWORD, true);

        assert!(!inventory.can_remove(slot));
        assert_eq!(inventory.remove(slot), None);
        assert_eq!(inventory.current_item(slot), Some(SWORD));

        inventory.set_anchored(SWORD, false);
        assert_eq!(inventory.remove(slot), Some(SWORD));
        assert_eq!(inventory.current_item(slot), None);
    }

    #[test]
    fn duplicate_slot_names_are_rejected() {
        let (mut inventory, _) = inventory();
        let err = inventory
            .allocate_slot(&SlotName::new("hand:left"))
            .unwrap_err();
        assert!(matches!(err, InventoryError::SlotNameTaken { .. }));
    }

    #[test]
    fn released_slot_forgets_its_item() {
        let (mut inventory, slot) = inventory();
        assert!(inventory.insert(slot, SWORD));
        inventory.release_slot(slot);

        assert_eq!(inventory.slot_count(), 0);
        assert!(!inventory.is_held(SWORD));
        assert_eq!(inventory.current_item(slot), None);
    }
}
