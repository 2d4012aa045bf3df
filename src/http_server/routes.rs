//! Inventory HTTP Routes
//!
//! Endpoints for searching the inventory and submitting new rows.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::inventory::{CreateRequest, InventoryRecord, Listing, SearchFilter};
use crate::store::InventoryStore;

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Gateway state shared across handlers: the store accessor only.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Listing>,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub ok: bool,
    pub created: InventoryRecord,
}

// ==================
// Router
// ==================

/// Build the inventory router over the given store accessor.
pub fn inventory_router(store: Arc<dyn InventoryStore>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/search", get(search_handler))
        .route("/inventory", post(create_handler))
        .with_state(AppState { store })
}

// ==================
// Handlers
// ==================

/// Liveness probe; `{"ok": true}` regardless of store state.
async fn root_handler() -> Json<OkResponse> {
    Json(OkResponse { ok: true })
}

/// Exact-match search over make/model/state, newest year first.
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<SearchResponse>> {
    let filter = SearchFilter::from_params(
        params.get("make").cloned(),
        params.get("model").cloned(),
        params.get("state").cloned(),
    )?;

    let rows = state.store.find_inventory(&filter).await?;
    let results = rows.into_iter().map(Listing::from).collect();
    Ok(Json(SearchResponse { results }))
}

/// Insert a single inventory row submitted by a wrecker.
///
/// Duplicate submissions create duplicate rows; the store has no
/// uniqueness constraint on this collection.
async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateRequest>,
) -> ApiResult<(StatusCode, Json<CreateResponse>)> {
    let row = body.validate()?;
    let created = state.store.create_inventory_row(&row).await?;
    Ok((StatusCode::CREATED, Json(CreateResponse { ok: true, created })))
}
