//! Geocoding Module
//!
//! Forward and reverse geocoding against Photon, plus batch lookups that
//! memoize repeated queries in a per-batch LRU cache.

mod batch;
mod client;
mod photon;
mod types;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use batch::{BatchGeocoder, BatchOutcome};
pub use client::{PhotonClient, READINESS_QUERY};
pub use photon::{Feature, FeatureCollection, Geometry};
pub use types::{CoordinateKey, Coordinates, Place};

// == Geocoder Trait ==
/// A single-query geocoding backend.
///
/// `Ok(None)` means the backend answered but found nothing; that outcome is
/// cacheable. `Err` means the lookup itself failed.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Place name or address to coordinates.
    async fn forward(&self, query: &str) -> Result<Option<Coordinates>>;

    /// Coordinates to the properties of the nearest place.
    async fn reverse(&self, coords: Coordinates) -> Result<Option<Place>>;
}
