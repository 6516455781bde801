//! Demo client entry point.
//!
//! Composition root for the inventory runtime: loads the item catalog,
//! constructs the session, subscribes a logging observer, and drives a
//! short add/remove sequence so the stacking behavior can be watched in
//! the log output. Set `INVENTORY_CATALOG` to point at a custom RON
//! catalog; the embedded demo catalog is used otherwise.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use inventory_content::{CatalogLoader, StaticItemCatalog};
use inventory_core::{ItemCatalog, ItemHandle};
use runtime::Session;

const DEMO_CATALOG: &str = include_str!("../data/items.ron");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Arc::new(load_catalog()?);
    let mut session = Session::new(Arc::clone(&catalog) as Arc<dyn ItemCatalog>);

    let names = Arc::clone(&catalog);
    session.subscribe_item_added(Arc::new(move |item: ItemHandle, amount: u32| {
        let id = names.id_for(item).unwrap_or("<unknown>");
        tracing::info!(id, amount, "item added");
    }));

    run_script(&mut session, &catalog)?;
    print_inventory(&session, &catalog);

    Ok(())
}

fn load_catalog() -> Result<StaticItemCatalog> {
    match std::env::var_os("INVENTORY_CATALOG") {
        Some(path) => {
            let path = PathBuf::from(path);
            CatalogLoader::load(&path)
                .with_context(|| format!("loading catalog from {}", path.display()))
        }
        None => CatalogLoader::parse(DEMO_CATALOG).context("parsing embedded demo catalog"),
    }
}

fn run_script(session: &mut Session, catalog: &StaticItemCatalog) -> Result<()> {
    let wood = handle(catalog, "wood")?;
    let potion = handle(catalog, "health_potion")?;
    let sword = handle(catalog, "iron_sword")?;

    // Fill-then-split: 100 wood lands as a full stack plus a partial one.
    session.add_item(wood, 100);
    // Tops the partial stack up before spilling into the last free slot.
    session.add_item(wood, 30);
    // Every slot is occupied; nothing is placed and no observer fires.
    session.add_item(sword, 1);
    // Draining the oldest stacks frees a slot again.
    session
        .remove_item(wood, 66)
        .context("removing wood from the session inventory")?;
    session.add_item(potion, 5);
    // Rejected: more potions than the session holds.
    if let Err(err) = session.remove_item(potion, 9) {
        tracing::info!(code = err.error_code(), "removal rejected: {err}");
    }

    Ok(())
}

fn handle(catalog: &StaticItemCatalog, id: &str) -> Result<ItemHandle> {
    catalog
        .handle_for(id)
        .with_context(|| format!("item '{id}' missing from catalog"))
}

fn print_inventory(session: &Session, catalog: &StaticItemCatalog) {
    let inventory = session.inventory();
    println!(
        "inventory ({}/{} slots):",
        inventory.len(),
        inventory.capacity()
    );
    for slot in inventory.slots() {
        let id = catalog.id_for(slot.handle()).unwrap_or("<unknown>");
        let max_stack = catalog
            .definition(slot.handle())
            .map(|definition| definition.max_stack)
            .unwrap_or(0);
        println!("  {:<16} {:>3}/{}", id, slot.quantity(), max_stack);
    }
}
