//! Geocoding value types and canonical cache keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Coordinates ==
/// A WGS84 point, in Photon's (longitude, latitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Checks that both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Canonical cache key for this point.
    pub fn key(&self) -> CoordinateKey {
        CoordinateKey::from(*self)
    }
}

// == Coordinate Key ==
/// Hashable identity of a coordinate pair.
///
/// Built from the IEEE-754 bit patterns of both components, so two pairs
/// share a key only when they are numerically the same point. `-0.0` is folded
/// into `0.0` and every NaN into a single NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    longitude: u64,
    latitude: u64,
}

impl From<Coordinates> for CoordinateKey {
    fn from(coords: Coordinates) -> Self {
        Self {
            longitude: canonical_bits(coords.longitude),
            latitude: canonical_bits(coords.latitude),
        }
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

// == Place ==
/// Properties of the best Photon match for a reverse lookup.
///
/// Photon's property set varies by feature type, so the raw JSON object is
/// kept and a few common fields get accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(pub Map<String, Value>);

impl Place {
    pub fn name(&self) -> Option<&str> {
        self.str_property("name")
    }

    pub fn city(&self) -> Option<&str> {
        self.str_property("city")
    }

    pub fn country(&self) -> Option<&str> {
        self.str_property("country")
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_property(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}
