//! Capability interface to the backing inventory.
//!
//! Hands never store items themselves. Each hand owns a reference to one slot
//! of an external inventory, and every storage question (can this item go
//! here, can it be removed, what is held) is answered by that inventory.
mod memory;

pub use memory::{ItemDefinition, MemoryInventory};

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemHandle, SlotKey, SlotName};

/// Slot operations the hand subsystem consumes from an inventory.
///
/// Implementations are synchronous and non-blocking; every call completes
/// within the owning actor's turn.
pub trait SlotInventory {
    /// Allocates a new named slot.
    fn allocate_slot(&mut self, name: &SlotName) -> Result<SlotKey, InventoryError>;

    /// Releases a slot. Anything still held in it becomes the inventory's
    /// responsibility. Releasing an unknown slot is a no-op.
    fn release_slot(&mut self, slot: SlotKey);

    /// Returns true if `item` could be inserted into `slot` right now.
    fn can_insert(&self, slot: SlotKey, item: ItemHandle) -> bool;

    /// Inserts `item` into `slot`. Returns false if the inventory refused.
    fn insert(&mut self, slot: SlotKey, item: ItemHandle) -> bool;

    /// Returns true if the item currently in `slot` may be removed.
    fn can_remove(&self, slot: SlotKey) -> bool;

    /// Removes and returns the item in `slot`, or `None` if refused.
    fn remove(&mut self, slot: SlotKey) -> Option<ItemHandle>;

    /// The item currently held in `slot`.
    fn current_item(&self, slot: SlotKey) -> Option<ItemHandle>;
}

/// Errors reported by an inventory when allocating slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// A slot with this name is already allocated.
    #[error("Slot '{name}' is already allocated")]
    SlotNameTaken { name: SlotName },

    /// The inventory has no room for another slot.
    #[error("No slots available (max: {max})")]
    NoSlotsAvailable { max: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotNameTaken { .. } => "INVENTORY_SLOT_NAME_TAKEN",
            Self::NoSlotsAvailable { .. } => "INVENTORY_NO_SLOTS",
        }
    }
}
