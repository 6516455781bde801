/// Inventory configuration constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventoryConfig;

impl InventoryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneous slots in a session inventory.
    pub const MAX_SLOTS: usize = 3;
}
