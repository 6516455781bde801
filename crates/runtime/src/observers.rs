//! Synchronous item-added notification.

use std::sync::Arc;

use inventory_core::ItemHandle;

/// Capability implemented by anything that wants to hear about items
/// landing in the inventory.
///
/// Observers are called synchronously on the session's thread, in
/// subscription order, before `add_item` returns. Plain closures qualify
/// through the blanket impl; no dedicated observer type is needed.
pub trait ItemAddedObserver: Send + Sync {
    /// Executed after `amount` units of `item` were placed (`amount >= 1`).
    fn on_item_added(&self, item: ItemHandle, amount: u32);
}

impl<F> ItemAddedObserver for F
where
    F: Fn(ItemHandle, u32) + Send + Sync,
{
    fn on_item_added(&self, item: ItemHandle, amount: u32) {
        self(item, amount)
    }
}

/// Ordered registry of item-added observers.
///
/// Subscription order is notification order. Subscribing the same
/// observer (the same `Arc` allocation) again is a no-op, so a given
/// observer fires at most once per add.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn ItemAddedObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Registers `observer` unless it is already subscribed.
    pub fn subscribe(&mut self, observer: Arc<dyn ItemAddedObserver>) {
        let already_subscribed = self
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer));
        if already_subscribed {
            return;
        }
        self.observers.push(observer);
    }

    /// Returns the number of subscribed observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are subscribed.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer once, in subscription order.
    pub(crate) fn notify_item_added(&self, item: ItemHandle, amount: u32) {
        for observer in &self.observers {
            observer.on_item_added(item, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn notifies_in_subscription_order() {
        let calls: Arc<Mutex<Vec<(&'static str, u32)>>> = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        let first = Arc::clone(&calls);
        registry.subscribe(Arc::new(move |_item: ItemHandle, amount: u32| {
            first.lock().unwrap().push(("first", amount));
        }));
        let second = Arc::clone(&calls);
        registry.subscribe(Arc::new(move |_item: ItemHandle, amount: u32| {
            second.lock().unwrap().push(("second", amount));
        }));

        registry.notify_item_added(ItemHandle(1), 10);

        assert_eq!(
            *calls.lock().unwrap(),
            vec![("first", 10), ("second", 10)]
        );
    }

    #[test]
    fn resubscribing_the_same_observer_is_a_no_op() {
        let calls = Arc::new(Mutex::new(0u32));
        let mut registry = ObserverRegistry::new();

        let counter = Arc::clone(&calls);
        let observer: Arc<dyn ItemAddedObserver> = Arc::new(move |_item: ItemHandle, _amount: u32| {
            *counter.lock().unwrap() += 1;
        });
        registry.subscribe(Arc::clone(&observer));
        registry.subscribe(observer);
        assert_eq!(registry.len(), 1);

        registry.notify_item_added(ItemHandle(1), 1);
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
