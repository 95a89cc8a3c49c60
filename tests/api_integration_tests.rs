//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle: router, batch geocoder, Photon
//! client and a fake Photon server.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use goat::{api::create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{client_for, spawn_fake_photon, FakePhoton};

// == Helper Functions ==

async fn create_test_app(cache_capacity: usize) -> (Router, FakePhoton) {
    let (address, fake) = spawn_fake_photon().await;
    let state = AppState::new(Arc::new(client_for(&address)), cache_capacity);
    (create_router(state), fake)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Forward Endpoint Tests ==

#[tokio::test]
async fn test_forward_endpoint_success() {
    let (app, fake) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json(
            "/forward",
            json!({"locations": ["austin", "nyc", "atlantis", "austin"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(
        json["results"],
        json!([
            {"longitude": -97.7, "latitude": 30.3},
            {"longitude": -74.0, "latitude": 40.7},
            null,
            {"longitude": -97.7, "latitude": 30.3}
        ])
    );
    assert_eq!(json["cache"]["hits"], 1);
    assert_eq!(json["cache"]["misses"], 3);
    assert_eq!(json["cache"]["capacity"], 1000);
    assert_eq!(fake.forward_requests(), 3);
}

#[tokio::test]
async fn test_forward_endpoint_small_cache_evicts() {
    // Capacity 2 scenario: austin, nyc, berlin evicts austin
    let (app, fake) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json(
            "/forward",
            json!({
                "locations": ["austin", "nyc", "berlin", "austin", "berlin"],
                "cache_capacity": 2
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["cache"]["capacity"], 2);
    assert_eq!(json["cache"]["evictions"], 2);
    assert_eq!(json["cache"]["total_entries"], 2);
    assert_eq!(json["cache"]["hits"], 1);
    assert_eq!(fake.forward_requests(), 4);
}

#[tokio::test]
async fn test_forward_endpoint_upstream_failure() {
    let (app, _) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json("/forward", json!({"locations": ["austin", "error"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_forward_endpoint_blank_location() {
    let (app, fake) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json("/forward", json!({"locations": ["austin", ""]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
    assert_eq!(fake.forward_requests(), 0);
}

#[tokio::test]
async fn test_forward_endpoint_wrong_shape() {
    let (app, _) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json("/forward", json!({"locations": "austin"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == Reverse Endpoint Tests ==

#[tokio::test]
async fn test_reverse_endpoint_success() {
    let (app, fake) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json(
            "/reverse",
            json!({"coordinates": [
                {"longitude": -97.59, "latitude": 30.35},
                {"longitude": -0.18, "latitude": -5.6},
                {"longitude": -97.59, "latitude": 30.35}
            ]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["results"][0]["name"], "place at -97.59,30.35");
    assert!(json["results"][1].is_null());
    assert_eq!(json["results"][2], json["results"][0]);
    assert_eq!(json["cache"]["hits"], 1);
    assert_eq!(fake.reverse_requests(), 2);
}

#[tokio::test]
async fn test_reverse_endpoint_out_of_range() {
    let (app, fake) = create_test_app(1000).await;

    let response = app
        .oneshot(post_json(
            "/reverse",
            json!({"coordinates": [{"longitude": 200.0, "latitude": 0.0}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fake.reverse_requests(), 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app(1000).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}
