//! Reqwest-backed PostgREST store adapter.
//!
//! Owns transport details only: header wiring, request timeout, HTTP error
//! mapping, and JSON decoding into inventory records.

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use crate::inventory::{InventoryRecord, NewInventoryRow, SearchFilter};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::query;
use super::InventoryStore;

/// Name of the collection holding inventory rows.
const INVENTORY_TABLE: &str = "inventory";

/// Store adapter speaking the PostgREST wire protocol.
///
/// Holds a single long-lived HTTP client plus immutable endpoint and key
/// configuration; safe for concurrent use since each call is an
/// independent round trip.
pub struct PostgrestStore {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl PostgrestStore {
    /// Build the adapter with the configured per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the HTTP client cannot be constructed
    /// or the endpoint URL cannot be extended with the REST path.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let endpoint = config
            .url
            .join(&format!("rest/v1/{INVENTORY_TABLE}"))
            .map_err(|e| StoreError::Transport(format!("invalid store endpoint: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl InventoryStore for PostgrestStore {
    async fn find_inventory(&self, filter: &SearchFilter) -> StoreResult<Vec<InventoryRecord>> {
        let response = self
            .authed(self.client.get(self.endpoint.clone()))
            .query(&query::search_params(filter))
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("invalid store payload: {e}")))
    }

    async fn create_inventory_row(&self, row: &NewInventoryRow) -> StoreResult<InventoryRecord> {
        let response = self
            .authed(self.client.post(self.endpoint.clone()))
            .query(&query::insert_params())
            .header("Prefer", "return=representation")
            // Single-object response instead of a one-element array.
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(row)
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("invalid store payload: {e}")))
    }
}

/// Pass successful responses through; turn everything else into the
/// store's own message.
async fn check_status(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(map_status_error(status, body.as_ref()))
}

fn map_transport_error(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::Transport(format!("store request timed out: {error}"))
    } else {
        StoreError::Transport(error.to_string())
    }
}

/// PostgREST error bodies carry a `message` field; pass it through
/// verbatim when present, fall back to the raw body or the status code.
fn map_status_error(status: StatusCode, body: &[u8]) -> StoreError {
    #[derive(Deserialize)]
    struct StoreErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<StoreErrorBody>(body) {
        return StoreError::Rejected(parsed.message);
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        StoreError::Rejected(format!("store responded with status {}", status.as_u16()))
    } else {
        StoreError::Rejected(text)
    }
}
