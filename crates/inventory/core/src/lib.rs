//! Deterministic inventory logic shared across the runtime and tools.
//!
//! `inventory-core` defines the canonical stacking rules: slot state,
//! capacity enforcement, and the allocation algorithm that distributes an
//! amount across existing and new stacks. All slot mutation flows through
//! [`allocator`]; consumers read state through the queries on
//! [`Inventory`] and supply item data through an [`ItemCatalog`]
//! implementation.
pub mod allocator;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use allocator::{Allocation, allocate, can_deallocate, deallocate};
pub use config::InventoryConfig;
pub use env::{ItemCatalog, ItemDefinition};
pub use error::{ErrorSeverity, InventoryError};
pub use state::{Inventory, ItemHandle, SessionInventory, Slot};
