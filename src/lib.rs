//! wreckstock - vehicle-parts inventory API over an external managed store
//!
//! One process: the request gateway (`http_server`) validates input and the
//! inventory accessor (`store`) forwards queries and inserts to the external
//! store, which owns durability, identifiers, and query execution.

pub mod config;
pub mod http_server;
pub mod inventory;
pub mod store;
