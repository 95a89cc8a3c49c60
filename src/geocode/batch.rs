//! Batch Geocoding
//!
//! Runs a list of queries through a [`Geocoder`], answering repeats from a
//! cache that lives only as long as the batch.

use std::sync::Arc;

use tracing::{debug, info};

use super::types::{CoordinateKey, Coordinates, Place};
use super::Geocoder;
use crate::cache::{CacheStats, LruCache};
use crate::error::Result;

// == Batch Outcome ==
/// Per-item results, in input order, and how the batch's cache fared.
#[derive(Debug, Clone)]
pub struct BatchOutcome<T> {
    pub results: Vec<T>,
    pub cache: CacheStats,
}

// == Batch Geocoder ==
/// Batch front-end over a shared geocoding backend.
#[derive(Clone)]
pub struct BatchGeocoder {
    geocoder: Arc<dyn Geocoder>,
    cache_capacity: usize,
}

impl BatchGeocoder {
    /// Creates a batch geocoder whose batches cache up to `cache_capacity`
    /// distinct queries each.
    pub fn new(geocoder: Arc<dyn Geocoder>, cache_capacity: usize) -> Self {
        Self {
            geocoder,
            cache_capacity,
        }
    }

    // == Forward ==
    /// Geocodes every location, querying the backend once per distinct
    /// location still in the cache.
    ///
    /// Locations the backend cannot resolve yield `None` and are cached as
    /// such. The first backend error aborts the batch.
    pub async fn forward_batch(
        &self,
        locations: &[String],
        capacity: Option<usize>,
    ) -> Result<BatchOutcome<Option<Coordinates>>> {
        let mut cache: LruCache<String, Option<Coordinates>> =
            LruCache::new(capacity.unwrap_or(self.cache_capacity))?;
        let mut results = Vec::with_capacity(locations.len());

        for location in locations {
            if let Some(hit) = cache.get(location.as_str()) {
                debug!("cache hit for '{}'", location);
                results.push(*hit);
                continue;
            }

            let coords = self.geocoder.forward(location).await?;
            if coords.is_none() {
                debug!("no geocoding result for '{}'", location);
            }
            cache.set(location.clone(), coords);
            results.push(coords);
        }

        let stats = cache.stats();
        info!(
            "forward batch: {} locations, {} lookups, {} cache hits",
            locations.len(),
            stats.misses,
            stats.hits
        );

        Ok(BatchOutcome {
            results,
            cache: stats,
        })
    }

    // == Reverse ==
    /// Reverse geocodes every point, querying the backend once per distinct
    /// point still in the cache.
    pub async fn reverse_batch(
        &self,
        points: &[Coordinates],
        capacity: Option<usize>,
    ) -> Result<BatchOutcome<Option<Place>>> {
        let mut cache: LruCache<CoordinateKey, Option<Place>> =
            LruCache::new(capacity.unwrap_or(self.cache_capacity))?;
        let mut results = Vec::with_capacity(points.len());

        for point in points {
            let key = point.key();
            if let Some(hit) = cache.get(&key) {
                debug!("cache hit for ({}, {})", point.longitude, point.latitude);
                results.push(hit.clone());
                continue;
            }

            let place = self.geocoder.reverse(*point).await?;
            cache.set(key, place.clone());
            results.push(place);
        }

        let stats = cache.stats();
        info!(
            "reverse batch: {} points, {} lookups, {} cache hits",
            points.len(),
            stats.misses,
            stats.hits
        );

        Ok(BatchOutcome {
            results,
            cache: stats,
        })
    }
}
