//! Pulse liveness runner.
//!
//! Building blocks for keeping an external watchdog fed:
//!
//! - [`LivenessSignaler`] — the single-operation collaborator that carries
//!   a liveness signal to the watchdog.
//! - [`RunnerConfig`] — loop interval and stop-timeout configuration.
//! - [`PeriodicRunner`] — the start/stop lifecycle around the background
//!   loop that performs work, pets the watchdog, and sleeps.

pub mod config;
pub mod runner;
pub mod signal;

pub use config::RunnerConfig;
pub use runner::PeriodicRunner;
pub use signal::{LivenessSignaler, SignalError};
