//! Photon HTTP Client
//!
//! Thin async client for Photon's forward (`/api`) and reverse (`/reverse`)
//! endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::photon::FeatureCollection;
use super::types::{Coordinates, Place};
use super::Geocoder;
use crate::error::{GeocodeError, Result};

/// Query used to check that Photon is up and has its index loaded.
pub const READINESS_QUERY: &str = "berlin";

// == Photon Client ==
/// HTTP client bound to one Photon base address.
#[derive(Debug, Clone)]
pub struct PhotonClient {
    http: reqwest::Client,
    base: Url,
}

impl PhotonClient {
    // == Constructor ==
    /// Creates a client for the Photon server at `address`.
    ///
    /// A trailing `/` is appended when missing so that endpoint paths join
    /// onto the address instead of replacing its last segment.
    pub fn new(address: &str, request_timeout: Duration) -> Result<Self> {
        let mut address = address.trim().to_string();
        if !address.ends_with('/') {
            address.push('/');
        }

        let base = Url::parse(&address).map_err(|e| {
            GeocodeError::InvalidConfig(format!("invalid Photon address '{}': {}", address, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| GeocodeError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base })
    }

    /// Base address requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // == Readiness Probe ==
    /// Returns true when Photon answers a basic search with 200 OK.
    pub async fn is_ready(&self) -> Result<bool> {
        let response = self
            .http
            .get(self.endpoint("api")?)
            .query(&[("q", READINESS_QUERY)])
            .send()
            .await?;

        Ok(response.status() == reqwest::StatusCode::OK)
    }

    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<FeatureCollection> {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, query);

        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Upstream(format!(
                "Photon answered /{} with status {}",
                path, status
            )));
        }

        Ok(response.json::<FeatureCollection>().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| GeocodeError::Internal(format!("invalid endpoint '{}': {}", path, e)))
    }
}

#[async_trait]
impl Geocoder for PhotonClient {
    async fn forward(&self, query: &str) -> Result<Option<Coordinates>> {
        let answer = self.fetch("api", &[("q", query.to_string())]).await?;
        Ok(answer.best_coordinates())
    }

    async fn reverse(&self, coords: Coordinates) -> Result<Option<Place>> {
        let answer = self
            .fetch(
                "reverse",
                &[
                    ("lon", coords.longitude.to_string()),
                    ("lat", coords.latitude.to_string()),
                ],
            )
            .await?;
        Ok(answer.best_place())
    }
}
