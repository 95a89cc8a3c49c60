//! Response DTOs for the geocoding API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::geocode::{BatchOutcome, Coordinates, Place};

/// Cache effectiveness for one batch
#[derive(Debug, Clone, Serialize)]
pub struct CacheSummary {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups sent to Photon
    pub misses: u64,
    /// Entries evicted during the batch
    pub evictions: u64,
    /// Entries in the cache when the batch finished
    pub total_entries: usize,
    /// Cache capacity used for the batch
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for CacheSummary {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for both batch endpoints
///
/// `results[i]` answers input item `i`; `null` means Photon found nothing.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse<T> {
    pub results: Vec<T>,
    pub cache: CacheSummary,
}

impl<T> From<BatchOutcome<T>> for BatchResponse<T> {
    fn from(outcome: BatchOutcome<T>) -> Self {
        Self {
            cache: CacheSummary::from(&outcome.cache),
            results: outcome.results,
        }
    }
}

/// Response body for POST /forward
pub type ForwardResponse = BatchResponse<Option<Coordinates>>;

/// Response body for POST /reverse
pub type ReverseResponse = BatchResponse<Option<Place>>;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
