//! Hand subsystem constants and data-driven layouts.

use crate::state::HandId;

/// Hand subsystem configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandsConfig {
    /// Largest item size a freshly allocated backing slot accepts.
    pub default_slot_size: u16,
}

impl HandsConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of hands a single actor may own.
    pub const MAX_HANDS: usize = 8;
    /// Maximum number of slots an in-memory inventory tracks.
    pub const MAX_SLOTS: usize = 32;

    /// Prefix applied to hand identifiers to name their backing slots.
    ///
    /// Non-hand slots (worn equipment, pockets) never carry this prefix, so
    /// hand slots cannot collide with them.
    pub const SLOT_PREFIX: &'static str = "hand:";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SLOT_SIZE: u16 = 3;

    pub fn new() -> Self {
        Self {
            default_slot_size: Self::DEFAULT_SLOT_SIZE,
        }
    }

    pub fn with_slot_size(default_slot_size: u16) -> Self {
        Self { default_slot_size }
    }
}

impl Default for HandsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered list of hands an actor kind starts with.
///
/// Order is significant: the first entry becomes the initial active hand and
/// the sequence defines cycling order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandLayout {
    pub hands: Vec<HandId>,
}

impl HandLayout {
    pub fn new<I, H>(hands: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandId>,
    {
        Self {
            hands: hands.into_iter().map(Into::into).collect(),
        }
    }

    /// Two-handed humanoid layout (`left`, `right`).
    pub fn humanoid() -> Self {
        Self::new(["left", "right"])
    }
}
