//! Periodic eviction of expired shares.
//!
//! Lazy purging on fetch only reclaims records somebody asks for again. The
//! sweeper runs [`ShareService::sweep`] on a fixed interval so memory stays
//! bounded by the number of live records even when nobody reads.

use codeshare_core::ShareService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Handle to a running sweep loop.
///
/// Dropping the handle leaves the loop running; call [`Sweeper::shutdown`]
/// to stop it.
#[derive(Debug)]
pub struct Sweeper {
    shutdown_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweep loop onto the current tokio runtime.
    ///
    /// The first sweep happens one `interval` after spawning. Intervals
    /// shorter than 10ms are raised to 10ms.
    pub fn spawn<S>(service: Arc<S>, interval: Duration) -> Self
    where
        S: ShareService + ?Sized,
    {
        let shutdown_token = CancellationToken::new();
        let interval = interval.max(MIN_INTERVAL);
        let handle = tokio::spawn(run(service, interval, shutdown_token.clone()));
        info!(interval_ms = interval.as_millis() as u64, "sweeper started");
        Self {
            shutdown_token,
            handle,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the loop and waits for an in-flight sweep to finish.
    pub async fn shutdown(self) {
        self.shutdown_token.cancel();
        if let Err(e) = self.handle.await {
            warn!(error = %e, "sweeper task ended abnormally");
        }
        info!("sweeper stopped");
    }
}

async fn run<S>(service: Arc<S>, interval: Duration, shutdown_token: CancellationToken)
where
    S: ShareService + ?Sized,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;
            () = shutdown_token.cancelled() => {
                debug!("sweeper received shutdown");
                break;
            }
            _ = ticker.tick() => {
                match service.sweep().await {
                    Ok(removed) => trace!(removed, "sweep pass finished"),
                    Err(e) => warn!(error = %e, "sweep pass failed"),
                }
            }
        }
    }
}
