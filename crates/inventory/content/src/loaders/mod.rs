//! Content loaders for reading item data from files.
//!
//! Loaders convert RON catalog files into [`StaticItemCatalog`]
//! instances, validating what the type system cannot: unique ids, unique
//! handles, positive stack sizes.
//!
//! [`StaticItemCatalog`]: crate::StaticItemCatalog

pub mod items;

pub use items::{CatalogLoader, ItemCatalogFile, ItemSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
