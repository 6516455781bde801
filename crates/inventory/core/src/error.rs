//! Common error infrastructure for inventory-core.
//!
//! Every condition here is an expected, caller-visible outcome: the
//! inventory is left unchanged by a rejected operation (partial placement
//! is reported through [`Allocation`](crate::allocator::Allocation), not
//! as an error). Internal inconsistencies such as a zero-quantity slot are
//! contract defects guarded by `debug_assert!`, never runtime cases.

use crate::state::ItemHandle;

/// Severity level of an error, used for categorization and log levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed later with the same input.
    ///
    /// Examples: inventory full, not enough of an item held
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: non-positive amount, item not present at all
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors that occur during inventory operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// Requested amount was zero (negative amounts are rejected at the
    /// session boundary before reaching the core).
    #[error("Amount must be positive")]
    InvalidAmount,

    /// A new slot was required but every slot is occupied, and nothing
    /// could be placed.
    #[error("Inventory is full (capacity: {capacity}, occupied: {occupied})")]
    Full {
        /// Maximum number of slots.
        capacity: usize,
        /// Current slot count.
        occupied: usize,
    },

    /// Subtract requested for an item with no slots.
    #[error("Inventory does not contain item {handle:?}")]
    ItemNotFound {
        /// The absent item.
        handle: ItemHandle,
    },

    /// Subtract amount exceeds the held total; nothing was removed.
    #[error("Not enough items (requested: {requested}, available: {available})")]
    InsufficientQuantity {
        /// Amount the caller asked to remove.
        requested: u32,
        /// Total currently held across all slots.
        available: u32,
    },
}

impl InventoryError {
    pub fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            // May succeed once slots free up or more items arrive.
            Full { .. } | InsufficientQuantity { .. } => ErrorSeverity::Recoverable,

            // Invalid input - retrying the same call cannot succeed.
            InvalidAmount | ItemNotFound { .. } => ErrorSeverity::Validation,
        }
    }

    pub fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            InvalidAmount => "INV_INVALID_AMOUNT",
            Full { .. } => "INV_FULL",
            ItemNotFound { .. } => "INV_ITEM_NOT_FOUND",
            InsufficientQuantity { .. } => "INV_INSUFFICIENT_QUANTITY",
        }
    }
}
