//! API Handlers
//!
//! HTTP request handlers for each geocoding endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::config::Config;
use crate::error::{GeocodeError, Result};
use crate::geocode::{BatchGeocoder, Geocoder};
use crate::models::{
    ForwardRequest, ForwardResponse, HealthResponse, ReverseRequest, ReverseResponse,
};

/// Application state shared across all handlers.
///
/// Holds no cache: every request builds its own inside [`BatchGeocoder`], so
/// concurrent requests never contend on shared state.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: BatchGeocoder,
}

impl AppState {
    /// Creates a new AppState around the given backend.
    pub fn new(geocoder: Arc<dyn Geocoder>, cache_capacity: usize) -> Self {
        Self {
            geocoder: BatchGeocoder::new(geocoder, cache_capacity),
        }
    }

    /// Creates a new AppState using the configured cache capacity.
    pub fn from_config(config: &Config, geocoder: Arc<dyn Geocoder>) -> Self {
        Self::new(geocoder, config.cache_capacity)
    }
}

/// Handler for POST /forward
///
/// Geocodes a batch of place names into coordinates.
pub async fn forward_handler(
    State(state): State<AppState>,
    Json(req): Json<ForwardRequest>,
) -> Result<Json<ForwardResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(GeocodeError::InvalidRequest(error_msg));
    }

    debug!("forward request with {} locations", req.locations.len());
    let outcome = state
        .geocoder
        .forward_batch(&req.locations, req.cache_capacity)
        .await?;

    Ok(Json(outcome.into()))
}

/// Handler for POST /reverse
///
/// Reverse geocodes a batch of coordinates into place properties.
pub async fn reverse_handler(
    State(state): State<AppState>,
    Json(req): Json<ReverseRequest>,
) -> Result<Json<ReverseResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(GeocodeError::InvalidRequest(error_msg));
    }

    debug!("reverse request with {} points", req.coordinates.len());
    let outcome = state
        .geocoder
        .reverse_batch(&req.coordinates, req.cache_capacity)
        .await?;

    Ok(Json(outcome.into()))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
