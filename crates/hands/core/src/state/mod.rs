//! Authoritative hand state.
//!
//! This module owns the hand arena, the identifier types shared with the
//! inventory collaborator, and the errors raised by hand-keyed operations.
//! Item storage is not held here; see [`crate::inventory`].
pub mod error;
pub mod hands;
pub mod types;

pub use error::HandError;
pub use hands::{HandSet, HandSlot};
pub use types::{HandId, ItemHandle, SlotKey, SlotName};
