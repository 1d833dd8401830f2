use std::borrow::Borrow;
use std::fmt;

use crate::config::HandsConfig;

/// Name of a hand ("left", "right", "tentacle_3", ...).
///
/// Unique within one [`HandSet`](super::HandSet).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HandId(String);

impl HandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HandId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for HandId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Reference to an item owned by the inventory collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Opaque reference to a backing slot, issued by the inventory on allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotKey(pub u32);

/// Name under which a hand's backing slot is registered with the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SlotName(String);

impl SlotName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Backing slot name for a hand: [`HandsConfig::SLOT_PREFIX`] followed by the id.
    pub fn for_hand(hand: &HandId) -> Self {
        Self(format!("{}{}", HandsConfig::SLOT_PREFIX, hand))
    }

    /// Returns the hand id this name was derived from, if it is a hand slot.
    pub fn hand_id(&self) -> Option<&str> {
        self.0.strip_prefix(HandsConfig::SLOT_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
