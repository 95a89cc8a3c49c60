//! Error types for the geocoding service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Geocode Error Enum ==
/// Unified error type for the cache, the Photon client and the HTTP service.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// A component was constructed with unusable parameters (e.g. capacity 0)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Photon could not be reached or answered with a non-success status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Photon answered, but not with a GeoJSON feature collection
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Photon did not become ready within the ramp-up window
    #[error("Server unavailable: {0}")]
    ServerUnavailable(String),

    /// The Photon process could not be started or stopped
    #[error("Process error: {0}")]
    Process(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GeocodeError::MalformedResponse(err.to_string())
        } else {
            GeocodeError::Upstream(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GeocodeError {
    fn into_response(self) -> Response {
        let status = match &self {
            GeocodeError::InvalidConfig(_) | GeocodeError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            GeocodeError::Upstream(_) | GeocodeError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            GeocodeError::ServerUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GeocodeError::Process(_) | GeocodeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the geocoding service.
pub type Result<T> = std::result::Result<T, GeocodeError>;
