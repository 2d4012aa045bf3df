//! In-memory inventory store.
//!
//! Mirrors the external store's filter and ordering semantics for
//! integration tests and local development. Ids are sequential integers.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::inventory::{InventoryRecord, NewInventoryRow, RecordId, SearchFilter};

use super::errors::StoreResult;
use super::InventoryStore;

/// Mutex-backed store holding rows for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<InventoryRecord>>,
    next_id: Mutex<i64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl InventoryStore for InMemoryStore {
    async fn find_inventory(&self, filter: &SearchFilter) -> StoreResult<Vec<InventoryRecord>> {
        let rows = self.rows.lock().unwrap();
        let mut matches: Vec<InventoryRecord> = rows
            .iter()
            .filter(|row| {
                row.make == filter.make && row.model == filter.model && row.state == filter.state
            })
            .map(|row| InventoryRecord {
                // Search reads never select the id column.
                id: None,
                ..row.clone()
            })
            .collect();
        matches.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(matches)
    }

    async fn create_inventory_row(&self, row: &NewInventoryRow) -> StoreResult<InventoryRecord> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let record = InventoryRecord {
            id: Some(RecordId(json!(*next_id))),
            make: row.make.clone(),
            model: row.model.clone(),
            year: row.year,
            colour: row.colour.clone(),
            state: row.state.clone(),
            suburb: row.suburb.clone(),
            wrecker_name: row.wrecker_name.clone(),
            contact: row.contact.clone(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }
}
