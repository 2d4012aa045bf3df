//! PostgREST query construction for the inventory collection.
//!
//! Keeps the wire format in one place: exact-match `eq.` filters, column
//! selection, and `order=year.desc`.

use crate::inventory::SearchFilter;

/// Columns selected on every search read. The id stays with the store.
pub const SEARCH_COLUMNS: &str = "make,model,year,colour,state,suburb,wrecker_name,contact";

/// Columns returned from an insert, including the assigned id.
pub const INSERT_COLUMNS: &str = "id,make,model,year,colour,state,suburb,wrecker_name,contact";

/// Query-string pairs for an exact-match search, newest year first.
pub fn search_params(filter: &SearchFilter) -> Vec<(&'static str, String)> {
    vec![
        ("select", SEARCH_COLUMNS.to_string()),
        ("make", format!("eq.{}", filter.make)),
        ("model", format!("eq.{}", filter.model)),
        ("state", format!("eq.{}", filter.state)),
        ("order", "year.desc".to_string()),
    ]
}

/// Query-string pairs for a single-row insert.
pub fn insert_params() -> Vec<(&'static str, String)> {
    vec![("select", INSERT_COLUMNS.to_string())]
}
