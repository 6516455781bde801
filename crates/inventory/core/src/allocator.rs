//! Stack allocation: distributing amounts across existing and new slots.
//!
//! These are pure functions over a passed-in [`Inventory`]; they own no
//! state. `allocate` tops up partial stacks before creating new ones
//! (fill-then-split), `deallocate` drains stacks all-or-nothing. Both walk
//! slots strictly in insertion order, so the first-created stack is always
//! filled and drained first.

use crate::env::ItemDefinition;
use crate::error::InventoryError;
use crate::state::{Inventory, ItemHandle};

/// Outcome of a successful allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Units actually placed into slots.
    pub placed: u32,
    /// Units that did not fit because every slot was occupied.
    pub overflow: u32,
}

impl Allocation {
    /// Allocation that placed nothing (rejected operations).
    pub const fn none() -> Self {
        Self {
            placed: 0,
            overflow: 0,
        }
    }

    /// True when the full requested amount was placed.
    pub const fn is_complete(&self) -> bool {
        self.overflow == 0
    }
}

/// Adds `amount` of an item, splitting across stacks as needed.
///
/// An item that is not yet present and fits a single stack gets one new
/// slot. Otherwise existing stacks are topped up in insertion order and
/// the rest is split into new stacks of `max_stack` plus a tail. Slot
/// creation is capacity-checked one stack at a time: when the inventory
/// runs out of slots mid-split, the stacks created so far remain and the
/// unplaced rest is reported as [`Allocation::overflow`].
///
/// # Errors
///
/// - [`InventoryError::InvalidAmount`] when `amount` is zero; no mutation.
/// - [`InventoryError::Full`] when not a single unit could be placed; no
///   mutation.
pub fn allocate<const CAP: usize>(
    inventory: &mut Inventory<CAP>,
    definition: &ItemDefinition,
    amount: u32,
) -> Result<Allocation, InventoryError> {
    if amount == 0 {
        return Err(InventoryError::InvalidAmount);
    }

    let handle = definition.handle;
    let max_stack = definition.max_stack;

    // Fresh item that fits one stack: a single new slot, capacity-checked
    // before any mutation.
    if !inventory.contains(handle) && amount <= max_stack {
        inventory.create_slot(handle, amount)?;
        return Ok(Allocation {
            placed: amount,
            overflow: 0,
        });
    }

    let mut remaining = amount;

    // Fill pass: top up existing stacks in insertion order.
    for index in 0..inventory.len() {
        if remaining == 0 {
            break;
        }
        let slot = inventory.slots()[index];
        if slot.handle() != handle {
            continue;
        }
        let available = max_stack.saturating_sub(slot.quantity());
        if available == 0 {
            continue;
        }
        let add = available.min(remaining);
        inventory.fill_slot(index, add);
        remaining -= add;
    }

    // Split pass: new stacks of max_stack, then the tail. Stops at the
    // first failed creation; what was placed stays placed.
    while remaining > 0 {
        let stack = remaining.min(max_stack);
        if inventory.create_slot(handle, stack).is_err() {
            break;
        }
        remaining -= stack;
    }

    let placed = amount - remaining;
    if placed == 0 {
        return Err(InventoryError::Full {
            capacity: CAP,
            occupied: inventory.len(),
        });
    }

    Ok(Allocation {
        placed,
        overflow: remaining,
    })
}

/// Checks whether `amount` of an item could be removed right now.
///
/// Read-only; this is the pre-check `deallocate` runs before mutating, and
/// the session uses it to reject removals up front.
///
/// # Errors
///
/// - [`InventoryError::InvalidAmount`] when `amount` is zero.
/// - [`InventoryError::ItemNotFound`] when no slot holds the item.
/// - [`InventoryError::InsufficientQuantity`] when the held total is short.
pub fn can_deallocate<const CAP: usize>(
    inventory: &Inventory<CAP>,
    handle: ItemHandle,
    amount: u32,
) -> Result<(), InventoryError> {
    if amount == 0 {
        return Err(InventoryError::InvalidAmount);
    }
    if !inventory.contains(handle) {
        return Err(InventoryError::ItemNotFound { handle });
    }
    let available = inventory.total_of(handle);
    if available < amount {
        return Err(InventoryError::InsufficientQuantity {
            requested: amount,
            available,
        });
    }
    Ok(())
}

/// Removes `amount` of an item, draining stacks in insertion order.
///
/// All-or-nothing: the operation is validated via [`can_deallocate`]
/// before any mutation, so either the full amount is removed or the
/// inventory is untouched. A stack drained to zero is deleted.
pub fn deallocate<const CAP: usize>(
    inventory: &mut Inventory<CAP>,
    handle: ItemHandle,
    amount: u32,
) -> Result<(), InventoryError> {
    can_deallocate(inventory, handle, amount)?;

    let mut remaining = amount;
    let mut index = 0;
    while remaining > 0 && index < inventory.len() {
        let slot = inventory.slots()[index];
        if slot.handle() != handle {
            index += 1;
            continue;
        }
        let take = slot.quantity().min(remaining);
        remaining -= take;
        if take == slot.quantity() {
            // Deleting shifts the next slot into `index`; do not advance.
            inventory.delete_slot(index);
        } else {
            inventory.drain_slot(index, take);
            index += 1;
        }
    }
    debug_assert_eq!(remaining, 0, "pre-check guarantees full removal");

    Ok(())
}
