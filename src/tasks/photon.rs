//! Photon Process
//!
//! Launches the Photon jar as a child process and kills it on shutdown.

use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{GeocodeError, Result};

/// Handle on a running Photon server.
///
/// The child is killed when the handle is dropped, so an early return during
/// startup never leaves a JVM behind.
#[derive(Debug)]
pub struct PhotonProcess {
    child: Child,
}

impl PhotonProcess {
    /// JVM arguments for the configured heap and jar.
    pub fn command_args(config: &Config) -> Vec<String> {
        vec![
            format!("-Xms{}", config.photon_heap),
            format!("-Xmx{}", config.photon_heap),
            "-jar".to_string(),
            config.photon_jar.clone(),
        ]
    }

    /// Starts Photon from `config.photon_dir`.
    ///
    /// Output is discarded; readiness is established by polling
    /// (see [`wait_until_ready`](super::wait_until_ready)), not by reading logs.
    pub fn launch(config: &Config) -> Result<Self> {
        let dir = config.photon_dir.as_ref().ok_or_else(|| {
            GeocodeError::InvalidConfig("PHOTON_DIR is required to launch Photon".to_string())
        })?;

        let args = Self::command_args(config);
        let child = Command::new(&config.java_bin)
            .args(&args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                GeocodeError::Process(format!(
                    "failed to start '{} {}' in {}: {}",
                    config.java_bin,
                    args.join(" "),
                    dir.display(),
                    e
                ))
            })?;

        info!(
            "Photon launched from {} (pid {:?})",
            dir.display(),
            child.id()
        );

        Ok(Self { child })
    }

    /// Kills Photon and waits for it to exit.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Ok(Some(status)) = self.child.try_wait() {
            warn!("Photon had already exited with {}", status);
            return Ok(());
        }

        self.child
            .kill()
            .await
            .map_err(|e| GeocodeError::Process(format!("failed to stop Photon: {}", e)))?;
        info!("Photon stopped");
        Ok(())
    }
}
