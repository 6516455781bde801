//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use inventory_core::{ItemDefinition, ItemHandle};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, StaticItemCatalog};
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemSpec>,
}

/// One authored item: string id plus the definition fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    pub handle: u32,
    pub max_stack: u32,
}

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<StaticItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    ///
    /// Rejects empty ids, zero stack sizes, and duplicated ids or handles.
    pub fn parse(content: &str) -> LoadResult<StaticItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut ids = HashSet::new();
        let mut handles = HashSet::new();
        let mut entries = Vec::with_capacity(file.items.len());

        for spec in file.items {
            if spec.id.trim().is_empty() {
                anyhow::bail!("Item with handle {} has an empty id", spec.handle);
            }
            if spec.max_stack == 0 {
                anyhow::bail!("Item '{}' has max_stack 0", spec.id);
            }
            if !ids.insert(spec.id.clone()) {
                anyhow::bail!("Duplicate item id '{}'", spec.id);
            }
            if !handles.insert(spec.handle) {
                anyhow::bail!("Duplicate item handle {} ('{}')", spec.handle, spec.id);
            }
            entries.push(CatalogEntry::new(
                spec.id,
                ItemDefinition::new(ItemHandle(spec.handle), spec.max_stack),
            ));
        }

        Ok(StaticItemCatalog::new(entries))
    }
}
