//! # Request Gateway
//!
//! HTTP listener for the inventory API: parses requests, validates fields,
//! dispatches to the inventory accessor, and shapes JSON responses.

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{inventory_router, AppState};
pub use server::HttpServer;
