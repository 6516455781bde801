//! Session-level behavior: catalog lookup, notification, rejection logging.

use std::sync::{Arc, Mutex};

use inventory_content::CatalogLoader;
use inventory_core::{Allocation, InventoryError, ItemHandle};
use runtime::Session;

const CATALOG_RON: &str = r#"(
    items: [
        (id: "wood", handle: 1, max_stack: 64),
        (id: "health_potion", handle: 2, max_stack: 16),
        (id: "iron_sword", handle: 3, max_stack: 1),
    ],
)"#;

const WOOD: ItemHandle = ItemHandle(1);
const POTION: ItemHandle = ItemHandle(2);
const SWORD: ItemHandle = ItemHandle(3);

fn session() -> Session {
    let catalog = CatalogLoader::parse(CATALOG_RON).expect("demo catalog parses");
    Session::new(Arc::new(catalog))
}

#[test]
fn add_then_remove_round_trips_to_empty() {
    let mut session = session();

    let allocation = session.add_item(WOOD, 40);
    assert_eq!(allocation, Allocation { placed: 40, overflow: 0 });
    assert_eq!(session.inventory().total_of(WOOD), 40);

    session.remove_item(WOOD, 40).unwrap();
    assert!(session.inventory().is_empty());
}

#[test]
fn observers_fire_in_subscription_order_with_the_placed_amount() {
    let mut session = session();
    let calls: Arc<Mutex<Vec<(&'static str, ItemHandle, u32)>>> =
        Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&calls);
    session.subscribe_item_added(Arc::new(move |item: ItemHandle, amount: u32| {
        first.lock().unwrap().push(("first", item, amount));
    }));
    let second = Arc::clone(&calls);
    session.subscribe_item_added(Arc::new(move |item: ItemHandle, amount: u32| {
        second.lock().unwrap().push(("second", item, amount));
    }));

    session.add_item(POTION, 10);

    assert_eq!(
        *calls.lock().unwrap(),
        vec![("first", POTION, 10), ("second", POTION, 10)]
    );
}

#[test]
fn observers_receive_the_placed_amount_not_the_requested_one() {
    let mut session = session();
    let amounts: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&amounts);
    session.subscribe_item_added(Arc::new(move |_item: ItemHandle, amount: u32| {
        sink.lock().unwrap().push(amount);
    }));

    // Session capacity is 3 slots of wood at 64 each: 192 of the 200 fit.
    let allocation = session.add_item(WOOD, 200);
    assert_eq!(allocation, Allocation { placed: 192, overflow: 8 });
    assert_eq!(*amounts.lock().unwrap(), vec![192]);
}

#[test]
fn no_notification_when_nothing_is_placed() {
    let mut session = session();
    // Swords do not stack; three of them occupy every slot.
    session.add_item(SWORD, 3);
    assert!(session.inventory().is_full());

    let calls = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&calls);
    session.subscribe_item_added(Arc::new(move |_item: ItemHandle, _amount: u32| {
        *counter.lock().unwrap() += 1;
    }));

    let allocation = session.add_item(WOOD, 5);
    assert_eq!(allocation, Allocation::none());
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn non_positive_amounts_are_no_ops() {
    let mut session = session();
    session.add_item(WOOD, 12);
    let before = session.inventory().clone();

    assert_eq!(session.add_item(WOOD, 0), Allocation::none());
    assert_eq!(session.add_item(WOOD, -5), Allocation::none());
    assert_eq!(session.inventory(), &before);

    assert_eq!(
        session.remove_item(WOOD, -1),
        Err(InventoryError::InvalidAmount)
    );
    assert_eq!(session.inventory(), &before);
}

#[test]
fn unknown_items_are_rejected_without_mutation() {
    let mut session = session();

    let allocation = session.add_item(ItemHandle(99), 5);
    assert_eq!(allocation, Allocation::none());
    assert!(session.inventory().is_empty());
}

#[test]
fn removal_is_all_or_nothing() {
    let mut session = session();
    session.add_item(POTION, 5);

    assert_eq!(
        session.remove_item(POTION, 10),
        Err(InventoryError::InsufficientQuantity {
            requested: 10,
            available: 5
        })
    );
    assert_eq!(session.inventory().total_of(POTION), 5);

    assert_eq!(
        session.remove_item(WOOD, 1),
        Err(InventoryError::ItemNotFound { handle: WOOD })
    );
}

#[test]
fn removal_does_not_notify_observers() {
    let mut session = session();
    session.add_item(POTION, 5);

    let calls = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&calls);
    session.subscribe_item_added(Arc::new(move |_item: ItemHandle, _amount: u32| {
        *counter.lock().unwrap() += 1;
    }));

    session.remove_item(POTION, 5).unwrap();
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn drained_stacks_free_slots_for_other_items() {
    let mut session = session();
    session.add_item(SWORD, 3);
    assert!(session.inventory().is_full());

    session.remove_item(SWORD, 1).unwrap();
    assert_eq!(session.inventory().len(), 2);

    let allocation = session.add_item(POTION, 4);
    assert_eq!(allocation.placed, 4);
    assert_eq!(session.inventory().total_of(POTION), 4);
}
