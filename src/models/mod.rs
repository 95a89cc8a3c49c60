//! Request and Response models for the geocoding API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ForwardRequest, ReverseRequest, MAX_BATCH_SIZE};
pub use responses::{
    BatchResponse, CacheSummary, ErrorResponse, ForwardResponse, HealthResponse, ReverseResponse,
};
