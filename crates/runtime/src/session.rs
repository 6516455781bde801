//! Session state and the inventory entry points.

use std::sync::Arc;

use tracing::{debug, error, warn};

use inventory_core::{
    Allocation, InventoryError, ItemCatalog, ItemHandle, SessionInventory, allocator,
};

use crate::observers::{ItemAddedObserver, ObserverRegistry};

/// Owns the inventory for one play session and orchestrates all access to
/// it.
///
/// The session is constructed explicitly by the composition root and
/// passed to whoever needs it; there is no ambient global instance. All
/// operations run to completion on the calling thread; a multithreaded
/// host must treat each call as one critical section (e.g. a mutex around
/// the whole session).
pub struct Session {
    inventory: SessionInventory,
    catalog: Arc<dyn ItemCatalog>,
    observers: ObserverRegistry,
}

impl Session {
    pub fn new(catalog: Arc<dyn ItemCatalog>) -> Self {
        Self {
            inventory: SessionInventory::new(),
            catalog,
            observers: ObserverRegistry::new(),
        }
    }

    /// Read-only view of the session inventory.
    pub fn inventory(&self) -> &SessionInventory {
        &self.inventory
    }

    /// Subscribes an observer to item-added notifications.
    ///
    /// Observers live as long as the session; they are dropped with it.
    pub fn subscribe_item_added(&mut self, observer: Arc<dyn ItemAddedObserver>) {
        self.observers.subscribe(observer);
    }

    /// Adds `amount` of an item, topping up existing stacks and creating
    /// new ones as needed.
    ///
    /// Rejections never panic: caller misuse (non-positive amount, item
    /// missing from the catalog) and expected conditions (inventory full)
    /// are logged and reported through the returned [`Allocation`].
    /// Observers are notified only when at least one unit was actually
    /// placed, and receive the placed amount rather than the requested
    /// one.
    pub fn add_item(&mut self, item: ItemHandle, amount: i32) -> Allocation {
        if amount <= 0 {
            warn!(?item, amount, "item add rejected: amount must be positive");
            return Allocation::none();
        }
        let Some(definition) = self.catalog.definition(item) else {
            error!(?item, "item add rejected: no catalog definition");
            return Allocation::none();
        };

        match allocator::allocate(&mut self.inventory, &definition, amount as u32) {
            Ok(allocation) => {
                if allocation.overflow > 0 {
                    debug!(
                        ?item,
                        placed = allocation.placed,
                        overflow = allocation.overflow,
                        "inventory ran out of slots mid-add"
                    );
                }
                if allocation.placed > 0 {
                    self.observers.notify_item_added(item, allocation.placed);
                }
                allocation
            }
            Err(err) => {
                debug!(
                    ?item,
                    amount,
                    code = err.error_code(),
                    "item add rejected: {err}"
                );
                Allocation::none()
            }
        }
    }

    /// Removes `amount` of an item, draining stacks in insertion order.
    ///
    /// All-or-nothing: the removal is validated up front, so a rejected
    /// call leaves the inventory untouched. Removal does not notify
    /// observers.
    pub fn remove_item(&mut self, item: ItemHandle, amount: i32) -> Result<(), InventoryError> {
        if amount <= 0 {
            warn!(?item, amount, "item remove rejected: amount must be positive");
            return Err(InventoryError::InvalidAmount);
        }
        let amount = amount as u32;

        if let Err(err) = allocator::can_deallocate(&self.inventory, item, amount) {
            debug!(
                ?item,
                amount,
                code = err.error_code(),
                "item remove rejected: {err}"
            );
            return Err(err);
        }
        allocator::deallocate(&mut self.inventory, item, amount)
    }
}
