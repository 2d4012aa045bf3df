//! # Inventory Accessor
//!
//! Façade over the external managed store. Exposes exactly two operations
//! and translates between domain shapes and the PostgREST wire format.
//! The store owns durability, identifiers, and query execution; every call
//! here is a fresh round trip.

mod client;
mod config;
mod errors;
mod memory;
mod query;

pub use client::PostgrestStore;
pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::inventory::{InventoryRecord, NewInventoryRow, SearchFilter};

/// The two operations this service issues against the external store.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Exact-match read over make/model/state, ordered by year descending.
    ///
    /// Zero matches is `Ok(vec![])`, not an error.
    async fn find_inventory(&self, filter: &SearchFilter) -> StoreResult<Vec<InventoryRecord>>;

    /// Single-row insert returning the row with its store-assigned id.
    async fn create_inventory_row(&self, row: &NewInventoryRow) -> StoreResult<InventoryRecord>;
}
