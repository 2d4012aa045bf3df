//! Inventory API Integration Tests
//!
//! Exercises the gateway end to end against the in-memory store:
//! validation messages, envelope shapes, status codes, and the
//! create-then-search round trip.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use wreckstock::http_server::inventory_router;
use wreckstock::store::InMemoryStore;

// =============================================================================
// Helpers
// =============================================================================

fn test_app() -> (Arc<InMemoryStore>, Router) {
    let store = Arc::new(InMemoryStore::new());
    let router = inventory_router(store.clone());
    (store, router)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn mazda_payload() -> Value {
    json!({
        "make": "Mazda",
        "model": "Mazda 3",
        "year": 2015,
        "state": "NSW",
        "suburb": "Parramatta",
        "wrecker_name": "ABC Wreckers",
        "contact": "0400000000"
    })
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn root_always_returns_ok() {
    let (_store, router) = test_app();

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    // Unchanged by prior calls or store contents
    post_json(&router, "/inventory", mazda_payload()).await;
    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

// =============================================================================
// Search Validation
// =============================================================================

#[tokio::test]
async fn search_missing_any_param_is_rejected() {
    let (_store, router) = test_app();

    for uri in [
        "/search",
        "/search?model=Mazda%203&state=NSW",
        "/search?make=Mazda&state=NSW",
        "/search?make=Mazda&model=Mazda%203",
        "/search?make=&model=Mazda%203&state=NSW",
    ] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(
            body,
            json!({"error": "Please provide make, model, and state."}),
            "uri {uri}"
        );
    }
}

#[tokio::test]
async fn search_with_no_matches_returns_empty_results() {
    let (_store, router) = test_app();

    let (status, body) = get(&router, "/search?make=Ford&model=Falcon&state=QLD").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"results": []}));
}

// =============================================================================
// Create Validation
// =============================================================================

#[tokio::test]
async fn create_with_missing_required_field_is_rejected() {
    let (store, router) = test_app();

    for field in ["make", "model", "year", "state", "wrecker_name", "contact"] {
        let mut payload = mazda_payload();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = post_json(&router, "/inventory", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(
            body,
            json!({"error": "Missing required fields: make, model, year, state, wrecker_name, contact"}),
            "field {field}"
        );
    }
    assert!(store.is_empty(), "no row may be created on validation failure");
}

#[tokio::test]
async fn create_with_non_numeric_year_is_rejected() {
    let (store, router) = test_app();

    let mut payload = mazda_payload();
    payload["year"] = json!("abc");

    let (status, body) = post_json(&router, "/inventory", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Year must be a valid number (e.g., 2015)"})
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_with_year_out_of_range_is_rejected() {
    let (store, router) = test_app();

    for year in [1949, 2036] {
        let mut payload = mazda_payload();
        payload["year"] = json!(year);

        let (status, body) = post_json(&router, "/inventory", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "year {year}");
        assert_eq!(
            body,
            json!({"error": "Year must be a valid number (e.g., 2015)"}),
            "year {year}"
        );
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_accepts_year_range_boundaries() {
    let (store, router) = test_app();

    for year in [1950, 2035] {
        let mut payload = mazda_payload();
        payload["year"] = json!(year);

        let (status, _body) = post_json(&router, "/inventory", payload).await;
        assert_eq!(status, StatusCode::CREATED, "year {year}");
    }
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_returns_created_row_with_assigned_id() {
    let (_store, router) = test_app();

    let (status, body) = post_json(&router, "/inventory", mazda_payload()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], json!(true));
    assert!(!body["created"]["id"].is_null(), "id must be assigned");
    assert_eq!(body["created"]["make"], json!("Mazda"));
    assert_eq!(body["created"]["year"], json!(2015));
}

#[tokio::test]
async fn create_accepts_year_as_numeric_string() {
    let (_store, router) = test_app();

    let mut payload = mazda_payload();
    payload["year"] = json!("2015");

    let (status, body) = post_json(&router, "/inventory", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created"]["year"], json!(2015));
}

#[tokio::test]
async fn duplicate_submissions_create_duplicate_rows() {
    let (store, router) = test_app();

    post_json(&router, "/inventory", mazda_payload()).await;
    post_json(&router, "/inventory", mazda_payload()).await;
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Round Trip
// =============================================================================

#[tokio::test]
async fn created_row_is_searchable_with_display_shape() {
    let (_store, router) = test_app();

    let (status, _body) = post_json(&router, "/inventory", mazda_payload()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&router, "/search?make=Mazda&model=Mazda%203&state=NSW").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"results": [{
            "make": "Mazda",
            "model": "Mazda 3",
            "year": 2015,
            "colour": "",
            "location": "NSW - Parramatta",
            "contact": "ABC Wreckers - 0400000000"
        }]})
    );
}

#[tokio::test]
async fn location_falls_back_to_state_without_suburb() {
    let (_store, router) = test_app();

    let payload = json!({
        "make": "Holden",
        "model": "Commodore",
        "year": 2008,
        "colour": "White",
        "state": "VIC",
        "wrecker_name": "South Side Parts",
        "contact": "0311111111"
    });
    post_json(&router, "/inventory", payload).await;

    let (status, body) = get(&router, "/search?make=Holden&model=Commodore&state=VIC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["location"], json!("VIC"));
    assert_eq!(body["results"][0]["colour"], json!("White"));
}

#[tokio::test]
async fn search_returns_newest_year_first() {
    let (_store, router) = test_app();

    for year in [2010, 2020, 2015] {
        let mut payload = mazda_payload();
        payload["year"] = json!(year);
        post_json(&router, "/inventory", payload).await;
    }

    let (_status, body) = get(&router, "/search?make=Mazda&model=Mazda%203&state=NSW").await;
    let years: Vec<i64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2020, 2015, 2010]);
}

#[tokio::test]
async fn search_does_not_match_other_states() {
    let (_store, router) = test_app();

    post_json(&router, "/inventory", mazda_payload()).await;

    let (status, body) = get(&router, "/search?make=Mazda&model=Mazda%203&state=VIC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"results": []}));
}
