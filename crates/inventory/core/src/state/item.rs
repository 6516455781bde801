/// Reference to an item definition stored outside the core (lookup via
/// [`ItemCatalog`](crate::env::ItemCatalog)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);
