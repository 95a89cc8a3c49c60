//! Fake Photon server shared by the integration tests.
//!
//! Serves `/api` and `/reverse` on an ephemeral loopback port from a small
//! fixed gazetteer and counts the requests it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use goat::geocode::PhotonClient;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct FakePhoton {
    forward_requests: Arc<AtomicUsize>,
    reverse_requests: Arc<AtomicUsize>,
}

impl FakePhoton {
    pub fn forward_requests(&self) -> usize {
        self.forward_requests.load(Ordering::SeqCst)
    }

    pub fn reverse_requests(&self) -> usize {
        self.reverse_requests.load(Ordering::SeqCst)
    }
}

/// Starts a fake Photon and returns its base address.
pub async fn spawn_fake_photon() -> (String, FakePhoton) {
    let fake = FakePhoton::default();
    let app = Router::new()
        .route("/api", get(api))
        .route("/reverse", get(reverse))
        .with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/", addr), fake)
}

pub fn client_for(address: &str) -> PhotonClient {
    PhotonClient::new(address, Duration::from_secs(5)).unwrap()
}

fn point_feature(longitude: f64, latitude: f64, name: &str) -> Value {
    json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [longitude, latitude]},
        "properties": {"name": name, "country": "Somewhere"}
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}

async fn api(
    State(fake): State<FakePhoton>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.forward_requests.fetch_add(1, Ordering::SeqCst);

    match params.get("q").map(String::as_str) {
        Some("berlin") => Json(collection(vec![point_feature(13.4, 52.5, "Berlin")])).into_response(),
        Some("austin") => Json(collection(vec![
            point_feature(-97.7, 30.3, "Austin"),
            point_feature(-92.9, 43.7, "Austin"),
        ]))
        .into_response(),
        Some("nyc") => Json(collection(vec![point_feature(-74.0, 40.7, "New York")])).into_response(),
        Some("3810 medical pkwy, austin, tx") => {
            Json(collection(vec![point_feature(-97.73, 30.35, "Medical Parkway")])).into_response()
        }
        Some("broken") => (StatusCode::OK, "this is not json").into_response(),
        Some("error") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(collection(Vec::new())).into_response(),
    }
}

async fn reverse(
    State(fake): State<FakePhoton>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    fake.reverse_requests.fetch_add(1, Ordering::SeqCst);

    let lon: f64 = params.get("lon").and_then(|v| v.parse().ok()).unwrap_or(f64::NAN);
    let lat: f64 = params.get("lat").and_then(|v| v.parse().ok()).unwrap_or(f64::NAN);

    // Only the northern hemisphere is "mapped"
    if lat > 0.0 {
        let name = format!("place at {},{}", lon, lat);
        Json(collection(vec![point_feature(lon, lat, &name)]))
    } else {
        Json(collection(Vec::new()))
    }
}
