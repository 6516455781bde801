//! Session orchestration on top of `inventory-core`.
//!
//! The runtime owns no stacking rules of its own: [`Session`] wires the
//! allocator to an item catalog, logs rejected operations, and fans out
//! item-added notifications to subscribed observers. Everything runs
//! synchronously on the calling thread.
pub mod observers;
pub mod session;

pub use observers::{ItemAddedObserver, ObserverRegistry};
pub use session::Session;
