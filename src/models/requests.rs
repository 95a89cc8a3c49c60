//! Request DTOs for the geocoding API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::geocode::Coordinates;

/// Largest batch accepted in one request
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Request body for forward geocoding (POST /forward)
///
/// # Fields
/// - `locations`: Place names or addresses, one result per entry
/// - `cache_capacity`: Optional per-batch cache size (uses the configured one if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardRequest {
    pub locations: Vec<String>,
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl ForwardRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_batch(self.locations.len(), self.cache_capacity) {
            return Some(error);
        }
        self.locations
            .iter()
            .position(|location| location.trim().is_empty())
            .map(|idx| format!("Location at index {} is empty", idx))
    }
}

/// Request body for reverse geocoding (POST /reverse)
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseRequest {
    pub coordinates: Vec<Coordinates>,
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl ReverseRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_batch(self.coordinates.len(), self.cache_capacity) {
            return Some(error);
        }
        self.coordinates
            .iter()
            .position(|coords| !coords.is_valid())
            .map(|idx| {
                format!(
                    "Coordinates at index {} are outside longitude [-180, 180] / latitude [-90, 90]",
                    idx
                )
            })
    }
}

fn validate_batch(len: usize, cache_capacity: Option<usize>) -> Option<String> {
    if len > MAX_BATCH_SIZE {
        return Some(format!(
            "Batch of {} items exceeds maximum of {}",
            len, MAX_BATCH_SIZE
        ));
    }
    if cache_capacity == Some(0) {
        return Some("cache_capacity must be at least 1".to_string());
    }
    None
}
