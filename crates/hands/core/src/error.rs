//! Common error infrastructure for hands-core.
//!
//! Domain errors (`HandError`, `InventoryError`) live next to the code that
//! raises them. This module holds the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each layer has its own error enum with specific variants
//! - **Refusal is not an error**: a slot rejecting an item is `Ok(None)` or
//!   `Ok(false)`, never one of these types
//! - **Severity Classification**: errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: stale or untrusted input; safe to ignore at input boundaries
/// - **Validation**: invalid content or setup; abort initialization
/// - **Internal**: collaborator misbehaved or an invariant broke
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with a different hand or ignore.
    ///
    /// Examples: unknown hand from a remote client, cycling with no hands
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: duplicate hand in a layout, too many hands
    Validation,

    /// Internal error - unexpected collaborator behavior.
    ///
    /// Examples: inventory refused to allocate a backing slot
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a collaborator or internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all hands-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification_helpers() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn only_collaborator_failures_are_internal() {
        use crate::inventory::InventoryError;
        use crate::state::{HandError, HandId};

        let allocation = HandError::SlotAllocation {
            hand: HandId::from("left"),
            source: InventoryError::NoSlotsAvailable { max: 1 },
        };
        assert!(allocation.severity().is_internal());
        assert!(InventoryError::NoSlotsAvailable { max: 1 }.severity().is_internal());
        assert!(HandError::NoHands.severity().is_recoverable());
        assert!(!HandError::HandListFull { max: 8 }.severity().is_internal());
    }
}
