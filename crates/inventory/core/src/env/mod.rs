//! Traits describing read-only item data.
//!
//! Catalogs expose item definitions owned outside the core (asset files,
//! content packs). The allocator consumes definitions by value and never
//! stores them; slots keep only the [`ItemHandle`](crate::state::ItemHandle).
mod items;

pub use items::{ItemCatalog, ItemDefinition};
