//! Goat - Batch geocoding in front of a Photon server
//!
//! Forward and reverse geocoding with per-batch LRU memoization of repeated queries.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goat::api::{create_router, AppState};
use goat::config::Config;
use goat::geocode::PhotonClient;
use goat::tasks::{wait_until_ready_or, PhotonProcess};

/// Main entry point for the Goat geocoding service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the Photon client
/// 4. Launch Photon when PHOTON_DIR is set
/// 5. Wait until Photon answers, or stop early on SIGINT/SIGTERM
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM, stopping Photon
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Goat geocoding service");

    let config = Config::from_env();
    config.validate()?;
    info!(
        "Configuration loaded: photon={}, cache_capacity={}, rampup={}s/{}s, port={}",
        config.photon_address,
        config.cache_capacity,
        config.rampup_timeout,
        config.rampup_interval,
        config.server_port
    );

    let client = PhotonClient::new(
        &config.photon_address,
        Duration::from_secs(config.request_timeout),
    )?;

    let photon = if config.photon_dir.is_some() {
        Some(PhotonProcess::launch(&config)?)
    } else {
        info!("PHOTON_DIR not set, expecting Photon to be running already");
        None
    };

    let ready = wait_until_ready_or(
        || client.is_ready(),
        Duration::from_secs(config.rampup_timeout),
        Duration::from_secs(config.rampup_interval),
        shutdown_signal(),
    )
    .await;

    match ready {
        Ok(true) => {}
        Ok(false) => {
            stop_photon(photon).await;
            info!("Shutdown before Photon became ready");
            return Ok(());
        }
        Err(e) => {
            stop_photon(photon).await;
            return Err(e.into());
        }
    }

    let state = AppState::from_config(&config, Arc::new(client));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    stop_photon(photon).await;

    info!("Server shutdown complete");
    Ok(())
}

/// Stops Photon if this service launched it.
async fn stop_photon(photon: Option<PhotonProcess>) {
    if let Some(photon) = photon {
        if let Err(e) = photon.shutdown().await {
            warn!("{}", e);
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
