//! API Module
//!
//! HTTP handlers and routing for the geocoding REST API.
//!
//! # Endpoints
//! - `POST /forward` - Geocode a batch of place names
//! - `POST /reverse` - Reverse geocode a batch of coordinates
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
