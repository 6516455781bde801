//! In-memory item catalog.

use inventory_core::{ItemCatalog, ItemDefinition, ItemHandle};

/// One catalog item: the authored string id plus the core-facing
/// definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub definition: ItemDefinition,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, definition: ItemDefinition) -> Self {
        Self {
            id: id.into(),
            definition,
        }
    }
}

/// Immutable in-memory catalog, the usual [`ItemCatalog`] implementation.
///
/// Built once at startup (from a RON file or literal entries) and shared
/// behind an `Arc`. Lookup is a linear scan; catalogs are small and read
/// once per operation.
#[derive(Clone, Debug, Default)]
pub struct StaticItemCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticItemCatalog {
    /// Builds a catalog from entries. Uniqueness of ids and handles is the
    /// loader's responsibility; duplicates here resolve to the first match.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Resolves an authored string id to its handle.
    pub fn handle_for(&self, id: &str) -> Option<ItemHandle> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.definition.handle)
    }

    /// Authored string id for a handle (display, logs).
    pub fn id_for(&self, handle: ItemHandle) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.definition.handle == handle)
            .map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemCatalog for StaticItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.entries
            .iter()
            .find(|entry| entry.definition.handle == handle)
            .map(|entry| entry.definition)
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.entries.iter().map(|entry| entry.definition).collect()
    }
}
