//! Hand-based inventory for actors.
//!
//! `hands-core` manages the ordered set of hands an actor owns, which hand is
//! active, and how items move into and out of hands. Storage itself belongs
//! to an external inventory reached through [`SlotInventory`]; every hand is a
//! thin wrapper over one backing slot of that inventory.
//!
//! The crate is organized around one component, [`HandSet`]:
//! - [`state`] holds the hand arena, identifiers and errors
//! - [`transfer`] implements place/take with active-hand priority
//! - [`snapshot`] produces the replicated [`HandsSnapshot`]
//! - [`input`] translates player and remote stimuli into hand operations
pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod snapshot;
pub mod state;
pub mod transfer;

pub use config::{HandLayout, HandsConfig};
pub use error::{ErrorSeverity, GameError};
pub use input::{BoundAction, HandInput, InputOutcome};
pub use inventory::{InventoryError, ItemDefinition, MemoryInventory, SlotInventory};
pub use snapshot::HandsSnapshot;
pub use state::{HandError, HandId, HandSet, HandSlot, ItemHandle, SlotKey, SlotName};
