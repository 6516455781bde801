//! Data-driven item definitions and loaders.
//!
//! This crate houses the static item catalog and provides loaders for RON
//! catalog files. Items are authored with human-facing string ids; the
//! loaders resolve them into [`inventory_core::ItemHandle`]s, which is all
//! the core ever sees. Catalog data is consumed by the runtime through the
//! [`inventory_core::ItemCatalog`] trait and never appears in inventory
//! state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogEntry, StaticItemCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ItemCatalogFile, ItemSpec};
