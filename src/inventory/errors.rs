//! Validation errors for client-supplied input.
//!
//! Messages are part of the public API contract and rendered to callers
//! verbatim.

use thiserror::Error;

/// Missing or malformed client input. Always a client error, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Search needs all three of make, model, and state.
    #[error("Please provide make, model, and state.")]
    MissingSearchParams,

    /// One or more required create fields is absent or empty.
    #[error("Missing required fields: make, model, year, state, wrecker_name, contact")]
    MissingRequiredFields,

    /// Year failed to parse as an integer or fell outside the accepted range.
    #[error("Year must be a valid number (e.g., 2015)")]
    InvalidYear,
}
