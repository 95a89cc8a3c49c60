//! Goat - Batch geocoding in front of a Photon server
//!
//! Forward and reverse geocoding with per-batch LRU memoization of repeated queries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
pub use error::{GeocodeError, Result};
pub use geocode::{BatchGeocoder, Coordinates, Geocoder, PhotonClient, Place};
