//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::error::{GeocodeError, Result};

/// Default address of a locally running Photon server.
pub const DEFAULT_PHOTON_ADDRESS: &str = "http://localhost:2322/";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Photon server
    pub photon_address: String,
    /// Per-batch LRU cache capacity
    pub cache_capacity: usize,
    /// Seconds to wait for Photon to answer before giving up
    pub rampup_timeout: u64,
    /// Seconds between readiness probes
    pub rampup_interval: u64,
    /// Per-request timeout for calls to Photon, in seconds
    pub request_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Directory holding the Photon jar and its database. `None` means Photon
    /// is managed externally and is not launched by this service.
    pub photon_dir: Option<PathBuf>,
    /// Photon jar file name, relative to `photon_dir`
    pub photon_jar: String,
    /// JVM heap size passed as both -Xms and -Xmx
    pub photon_heap: String,
    /// Java executable
    pub java_bin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PHOTON_ADDRESS` - Photon base URL (default: http://localhost:2322/)
    /// - `CACHE_CAPACITY` - Per-batch cache capacity (default: 1000)
    /// - `RAMPUP_TIMEOUT` - Readiness timeout in seconds (default: 100)
    /// - `RAMPUP_INTERVAL` - Readiness probe interval in seconds (default: 10)
    /// - `REQUEST_TIMEOUT` - Photon request timeout in seconds (default: 30)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PHOTON_DIR` - Launch Photon from this directory (default: unset)
    /// - `PHOTON_JAR` - Photon jar name (default: photon-0.3.1.jar)
    /// - `PHOTON_HEAP` - JVM heap size (default: 12g)
    /// - `JAVA_BIN` - Java executable (default: java)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            photon_address: env::var("PHOTON_ADDRESS").unwrap_or(defaults.photon_address),
            cache_capacity: parsed_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            rampup_timeout: parsed_var("RAMPUP_TIMEOUT").unwrap_or(defaults.rampup_timeout),
            rampup_interval: parsed_var("RAMPUP_INTERVAL").unwrap_or(defaults.rampup_interval),
            request_timeout: parsed_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            photon_dir: env::var("PHOTON_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            photon_jar: env::var("PHOTON_JAR").unwrap_or(defaults.photon_jar),
            photon_heap: env::var("PHOTON_HEAP").unwrap_or(defaults.photon_heap),
            java_bin: env::var("JAVA_BIN").unwrap_or(defaults.java_bin),
        }
    }

    /// Rejects settings the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(GeocodeError::InvalidConfig(
                "CACHE_CAPACITY must be at least 1".to_string(),
            ));
        }
        if self.rampup_interval == 0 {
            return Err(GeocodeError::InvalidConfig(
                "RAMPUP_INTERVAL must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photon_address: DEFAULT_PHOTON_ADDRESS.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            rampup_timeout: 100,
            rampup_interval: 10,
            request_timeout: 30,
            server_port: 3000,
            photon_dir: None,
            photon_jar: "photon-0.3.1.jar".to_string(),
            photon_heap: "12g".to_string(),
            java_bin: "java".to_string(),
        }
    }
}
