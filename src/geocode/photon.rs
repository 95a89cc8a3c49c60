//! Photon Response Model
//!
//! The subset of Photon's GeoJSON `FeatureCollection` the service reads.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::types::{Coordinates, Place};

/// Top-level Photon answer to `/api` and `/reverse`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One match. Photon orders features by relevance, best first.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl FeatureCollection {
    /// Coordinates of the best match, if the query was geocoded at all.
    ///
    /// A query counts as geocoded when the first feature carries a geometry
    /// with at least a longitude and a latitude.
    pub fn best_coordinates(&self) -> Option<Coordinates> {
        let geometry = self.features.first()?.geometry.as_ref()?;
        match geometry.coordinates.as_slice() {
            [longitude, latitude, ..] => Some(Coordinates::new(*longitude, *latitude)),
            _ => None,
        }
    }

    /// Properties of the best match.
    pub fn best_place(&self) -> Option<Place> {
        self.features
            .first()
            .map(|feature| Place(feature.properties.clone()))
    }
}
