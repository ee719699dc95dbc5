//! Start/stop lifecycle around the periodic liveness loop.
//!
//! [`PeriodicRunner`] owns a background tokio task that performs a unit of
//! work, pets the watchdog, and sleeps, until its [`CancellationToken`] is
//! triggered. `stop` waits for the task with a bounded timeout and abandons
//! it (without aborting) if the bound is exceeded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use pulse_core::CoreError;

use crate::config::RunnerConfig;
use crate::signal::LivenessSignaler;

/// Periodic background task that signals liveness to an external watchdog.
///
/// A runner is driven by one logical owner: `start` and `stop` take
/// `&mut self`, so concurrent lifecycle calls on a shared instance are not
/// representable. `is_alive` and `iterations` are read-only and may be
/// called at any time.
pub struct PeriodicRunner {
    signaler: Arc<dyn LivenessSignaler>,
    config: RunnerConfig,
    /// Written by the loop task, read by the owner. Persists across
    /// stop/start cycles; never reset.
    iterations: Arc<AtomicU64>,
    /// Cooperative stop signal for the current loop task. Replaced with a
    /// fresh token on every `start` so a restart never observes a stale
    /// cancellation.
    cancel: Option<CancellationToken>,
    /// Handle of the running loop task; `None` when idle.
    handle: Option<JoinHandle<()>>,
}

impl PeriodicRunner {
    /// Create a runner from a signaler and configuration.
    ///
    /// Fails if the configuration does not validate (zero interval or zero
    /// stop timeout).
    pub fn new(
        signaler: Arc<dyn LivenessSignaler>,
        config: RunnerConfig,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            signaler,
            config,
            iterations: Arc::new(AtomicU64::new(0)),
            cancel: None,
            handle: None,
        })
    }

    /// Start the background loop.
    ///
    /// A no-op (with a warning) if the loop is already running. Returns
    /// immediately; the loop runs on a spawned tokio task, so this must be
    /// called from within a runtime.
    pub fn start(&mut self) {
        if self.is_alive() {
            tracing::warn!("Runner already running, ignoring start");
            return;
        }

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_loop(
            Arc::clone(&self.signaler),
            self.config.interval,
            Arc::clone(&self.iterations),
            cancel.clone(),
        ));

        self.cancel = Some(cancel);
        self.handle = Some(handle);
        tracing::info!(
            interval_ms = self.config.interval.as_millis() as u64,
            "Runner task started"
        );
    }

    /// Stop the background loop.
    ///
    /// Triggers the stop signal, then waits up to the configured stop
    /// timeout for the loop task to finish. On timeout the task is
    /// abandoned, not aborted: the handle is dropped, the task keeps
    /// running until its current pet call returns, and a warning is
    /// logged. Either way the handle is cleared, so a later `start` spawns
    /// a fresh loop. Calling this on a never-started runner is a no-op.
    pub async fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }

        let Some(handle) = self.handle.take() else {
            tracing::debug!("Stop requested but runner was never started");
            return;
        };

        match tokio::time::timeout(self.config.stop_timeout, handle).await {
            Ok(Ok(())) => tracing::info!("Runner task stopped"),
            Ok(Err(e)) => tracing::error!(error = %e, "Runner task failed"),
            Err(_) => tracing::warn!(
                timeout_ms = self.config.stop_timeout.as_millis() as u64,
                "Runner task did not finish in time, abandoning it"
            ),
        }
    }

    /// Whether the background loop task is currently running.
    pub fn is_alive(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Number of loop iterations performed so far.
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }
}

/// Run the liveness loop until `cancel` is triggered.
///
/// Each iteration performs the (placeholder) unit of work, pets the
/// watchdog, and sleeps for `interval`. A failing pet is logged and the
/// loop continues; only cancellation ends it. The sleep is a plain delay,
/// not an interval scheduler: the time spent working and petting drifts
/// the cadence, which is acceptable for a liveness signal.
async fn run_loop(
    signaler: Arc<dyn LivenessSignaler>,
    interval: Duration,
    iterations: Arc<AtomicU64>,
    cancel: CancellationToken,
) {
    tracing::info!("Liveness loop started");

    loop {
        let iteration = iterations.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(iteration, "Performing periodic task");

        if let Err(e) = signaler.pet().await {
            tracing::error!(error = %e, "Failed to pet watchdog");
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::info!("Liveness loop stopped");
}
