//! Store-side failures.
//!
//! The store's message is the whole payload here: callers surface it
//! verbatim as the HTTP 500 body, so Display carries no prefix.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A fault reported by, or while reaching, the external store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store rejected the request (bad query, constraint violation, ...).
    #[error("{0}")]
    Rejected(String),

    /// The request never completed: connect failure, timeout, TLS, DNS.
    #[error("{0}")]
    Transport(String),

    /// The store answered with a payload that did not decode.
    #[error("{0}")]
    Decode(String),
}
