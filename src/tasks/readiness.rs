//! Readiness Polling
//!
//! Photon needs a while to open its index after launch. These helpers poll
//! until it answers or the ramp-up window runs out.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{GeocodeError, Result};
use crate::geocode::PhotonClient;

/// Polls `probe` until it reports ready.
///
/// Sleeps `interval` before every probe and keeps going while the total time
/// slept stays within `timeout`, so a 100 s timeout with a 10 s interval makes
/// ten attempts. At least one attempt is always made. Probe errors (typically
/// connection refused while the JVM starts) count as "not ready yet".
pub async fn wait_until_ready<F, Fut>(
    mut probe: F,
    timeout: Duration,
    interval: Duration,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    if interval.is_zero() {
        return Err(GeocodeError::InvalidConfig(
            "readiness interval must be positive".to_string(),
        ));
    }

    let mut waited = Duration::ZERO;
    let mut attempts = 0u32;

    loop {
        tokio::time::sleep(interval).await;
        waited += interval;
        attempts += 1;

        match probe().await {
            Ok(true) => {
                info!("Photon ready after {} attempt(s)", attempts);
                return Ok(());
            }
            Ok(false) => debug!(
                "Readiness probe did not return 200, trying again in {:?}",
                interval
            ),
            Err(e) => debug!(
                "Readiness probe failed ({}), trying again in {:?}",
                e, interval
            ),
        }

        if waited + interval > timeout {
            break;
        }
    }

    Err(GeocodeError::ServerUnavailable(format!(
        "Photon did not become ready within {:?} ({} attempts)",
        timeout, attempts
    )))
}

/// Like [`wait_until_ready`], but gives up as soon as `shutdown` completes.
///
/// Returns `Ok(true)` once ready and `Ok(false)` when shutdown came first.
pub async fn wait_until_ready_or<F, Fut, S>(
    probe: F,
    timeout: Duration,
    interval: Duration,
    shutdown: S,
) -> Result<bool>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = wait_until_ready(probe, timeout, interval) => result.map(|()| true),
        _ = shutdown => {
            info!("Shutdown requested while waiting for Photon");
            Ok(false)
        }
    }
}

/// Waits for the Photon server behind `client`.
pub async fn wait_for_photon(
    client: &PhotonClient,
    timeout: Duration,
    interval: Duration,
) -> Result<()> {
    wait_until_ready(|| client.is_ready(), timeout, interval).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    const TICK: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_ready_on_first_probe() {
        let calls = AtomicU32::new(0);
        let result = wait_until_ready(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(true) }
            },
            TICK * 10,
            TICK,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_through_errors() {
        let calls = AtomicU32::new(0);
        let result = wait_until_ready(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    match n {
                        0 => Err(GeocodeError::Upstream("connection refused".into())),
                        1 => Ok(false),
                        _ => Ok(true),
                    }
                }
            },
            TICK * 10,
            TICK,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_timeout() {
        let calls = AtomicU32::new(0);
        let result = wait_until_ready(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(false) }
            },
            TICK * 4,
            TICK,
        )
        .await;

        assert!(matches!(result, Err(GeocodeError::ServerUnavailable(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_interval_longer_than_timeout_probes_once() {
        let calls = AtomicU32::new(0);
        let result = wait_until_ready(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(false) }
            },
            TICK,
            TICK * 3,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let result = wait_until_ready(|| async { Ok(true) }, TICK, Duration::ZERO).await;
        assert!(matches!(result, Err(GeocodeError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_rampup() {
        // Photon never answers and the window is long; the signal must win
        let calls = AtomicU32::new(0);
        let started = std::time::Instant::now();
        let result = wait_until_ready_or(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(false) }
            },
            Duration::from_secs(100),
            TICK,
            tokio::time::sleep(TICK * 3),
        )
        .await;

        assert!(!result.unwrap());
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(calls.load(Ordering::SeqCst) < 100);
    }

    #[tokio::test]
    async fn test_ready_before_shutdown() {
        let result = wait_until_ready_or(
            || async { Ok(true) },
            TICK * 10,
            TICK,
            std::future::pending::<()>(),
        )
        .await;

        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_timeout_still_reported_without_shutdown() {
        let result = wait_until_ready_or(
            || async { Ok(false) },
            TICK * 2,
            TICK,
            std::future::pending::<()>(),
        )
        .await;

        assert!(matches!(result, Err(GeocodeError::ServerUnavailable(_))));
    }
}
