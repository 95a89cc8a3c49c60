//! Background Tasks Module
//!
//! Lifecycle of the external Photon server.
//!
//! # Tasks
//! - Launch: Starts the Photon jar when the service owns it
//! - Readiness: Polls Photon until it answers or the ramp-up window expires

mod photon;
mod readiness;

pub use photon::PhotonProcess;
pub use readiness::{wait_for_photon, wait_until_ready, wait_until_ready_or};
