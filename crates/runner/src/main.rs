use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse_runner::{LivenessSignaler, PeriodicRunner, RunnerConfig, SignalError};

/// Demonstration signaler: petting the watchdog just logs a line.
struct LogSignaler;

#[async_trait]
impl LivenessSignaler for LogSignaler {
    async fn pet(&self) -> Result<(), SignalError> {
        tracing::info!("Watchdog petted");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = RunnerConfig::from_env();
    tracing::info!(
        interval_ms = config.interval.as_millis() as u64,
        stop_timeout_ms = config.stop_timeout.as_millis() as u64,
        "Loaded runner configuration"
    );

    // --- Runner ---
    let mut runner = PeriodicRunner::new(Arc::new(LogSignaler), config)
        .expect("Invalid runner configuration");
    runner.start();

    shutdown_signal().await;

    runner.stop().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the runner shuts
/// down cleanly whether stopped interactively or by a process manager
/// (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
