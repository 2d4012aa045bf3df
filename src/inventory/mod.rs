//! # Inventory Domain
//!
//! Typed records for inventory rows at each boundary: raw create input,
//! validated insert row, stored record, and the display shape returned
//! by search.

mod errors;
mod model;

pub use errors::ValidationError;
pub use model::{
    CreateRequest, InventoryRecord, Listing, NewInventoryRow, RecordId, SearchFilter, YEAR_MAX,
    YEAR_MIN,
};
