//! Slot storage for a session inventory.

use arrayvec::ArrayVec;

use crate::config::InventoryConfig;
use crate::error::InventoryError;
use crate::state::ItemHandle;

/// One stack of a single item kind.
///
/// Quantity stays within `1..=max_stack` for as long as the slot exists; a
/// drained slot is deleted rather than kept at zero. Fields are private so
/// that only the allocator (through the `pub(crate)` mutators on
/// [`Inventory`]) can change them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    handle: ItemHandle,
    quantity: u32,
}

impl Slot {
    pub(crate) fn new(handle: ItemHandle, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "slot created with zero quantity");
        Self { handle, quantity }
    }

    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered, fixed-capacity collection of item stacks.
///
/// Insertion order is preserved and drives the allocator's tie-break rule:
/// the first-created slot is filled and drained first. Multiple partial
/// stacks of the same item may coexist; they are only merged by the
/// allocator's fill pass. The session-level capacity is fixed through
/// [`SessionInventory`]; other capacities can be instantiated directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory<const CAP: usize> {
    slots: ArrayVec<Slot, CAP>,
}

/// Inventory with the session capacity from [`InventoryConfig`].
pub type SessionInventory = Inventory<{ InventoryConfig::MAX_SLOTS }>;

impl<const CAP: usize> Inventory<CAP> {
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    // ========================================================================
    // Read-only queries
    // ========================================================================

    /// All slots in insertion order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// All slots holding `handle`, in insertion order.
    pub fn slots_of(&self, handle: ItemHandle) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |slot| slot.handle == handle)
    }

    /// First slot holding `handle` by insertion order, or `None`.
    pub fn first_slot_of(&self, handle: ItemHandle) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.handle == handle)
    }

    /// Summed quantity of `handle` across all of its slots.
    pub fn total_of(&self, handle: ItemHandle) -> u32 {
        self.slots_of(handle).map(Slot::quantity).sum()
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.first_slot_of(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == CAP
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    // ========================================================================
    // Lifecycle (allocator only)
    // ========================================================================

    /// Appends a new slot at the end.
    ///
    /// The capacity check happens before any mutation; on [`InventoryError::Full`]
    /// no slot is created. The allocator guarantees `0 < amount <= max_stack`
    /// before calling.
    pub(crate) fn create_slot(
        &mut self,
        handle: ItemHandle,
        amount: u32,
    ) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: CAP,
                occupied: self.slots.len(),
            });
        }
        self.slots.push(Slot::new(handle, amount));
        Ok(())
    }

    /// Removes the slot at `index`; no-op when out of range.
    pub(crate) fn delete_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    /// Raises the quantity of the slot at `index` by `amount`.
    ///
    /// The allocator guarantees the result stays within the item's max stack.
    pub(crate) fn fill_slot(&mut self, index: usize, amount: u32) {
        self.slots[index].quantity += amount;
    }

    /// Lowers the quantity of the slot at `index` by `amount`.
    ///
    /// The allocator deletes the slot instead when the removal would leave
    /// it at zero.
    pub(crate) fn drain_slot(&mut self, index: usize, amount: u32) {
        debug_assert!(
            amount < self.slots[index].quantity,
            "full drain must delete the slot"
        );
        self.slots[index].quantity -= amount;
    }
}
