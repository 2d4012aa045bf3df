//! Store Connection Configuration
//!
//! Immutable endpoint settings established once at startup and shared by
//! every request.

use std::time::Duration;

use url::Url;

/// Default per-request timeout against the external store.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the external store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base endpoint URL; REST paths are joined onto it.
    pub url: Url,

    /// Access key sent as both `apikey` header and bearer token.
    pub api_key: String,

    /// Per-request timeout for every round trip.
    pub timeout: Duration,
}

impl StoreConfig {
    /// Create a config with the default timeout.
    pub fn new(url: Url, api_key: impl Into<String>) -> Self {
        Self {
            url,
            api_key: api_key.into(),
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}
