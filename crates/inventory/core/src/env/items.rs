use crate::state::ItemHandle;

/// Read-only source of item definitions.
///
/// Implemented outside the core (e.g. by `inventory-content`'s static
/// catalog). Definitions are immutable value data: a `max_stack` never
/// changes for the lifetime of the item kind.
pub trait ItemCatalog: Send + Sync {
    /// Definition for `handle`, or `None` when the catalog does not know it.
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this catalog.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Item definition referenced from slots through [`ItemHandle`].
///
/// # Stacking
///
/// Every item has a `max_stack` value:
/// - Equipment-like items: max_stack = 1 (cannot stack)
/// - Resources and consumables: larger values (e.g. 64)
///
/// Display data (name, description) is owned by the catalog and never
/// enters the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub max_stack: u32,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, max_stack: u32) -> Self {
        debug_assert!(max_stack > 0, "max_stack must be positive");
        Self { handle, max_stack }
    }
}
