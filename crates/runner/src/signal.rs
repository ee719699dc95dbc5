//! The liveness-signal boundary.
//!
//! The watchdog itself lives outside this system; the runner only needs a
//! single capability from it. Implementations decide what a pet physically
//! is (a device write, a socket message, a log line in the demo binary).

use async_trait::async_trait;

/// Error reported by a liveness-signal operation.
///
/// The runner treats every failure identically (log and continue), so the
/// taxonomy stays flat.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("Liveness signal failed: {0}")]
    Failed(String),
}

/// A collaborator that can tell the external watchdog "still alive".
#[async_trait]
pub trait LivenessSignaler: Send + Sync {
    /// Signal liveness once.
    ///
    /// Errors are absorbed by the caller; a failing signaler never stops
    /// the loop that drives it.
    async fn pet(&self) -> Result<(), SignalError>;
}
