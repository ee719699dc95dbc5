//! Runner configuration loaded from environment variables.

use std::time::Duration;

use pulse_core::pacing::{
    validate_interval, validate_stop_timeout, DEFAULT_INTERVAL_MS, DEFAULT_STOP_TIMEOUT_MS,
};
use pulse_core::CoreError;

/// Runner configuration.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Time between loop iterations (default: 1 s).
    pub interval: Duration,
    /// How long `stop` waits for the loop task before abandoning it
    /// (default: 5 s).
    pub stop_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            stop_timeout: Duration::from_millis(DEFAULT_STOP_TIMEOUT_MS),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `LIVENESS_INTERVAL_MS` | `1000`  |
    /// | `STOP_TIMEOUT_MS`      | `5000`  |
    pub fn from_env() -> Self {
        let interval_ms: u64 = std::env::var("LIVENESS_INTERVAL_MS")
            .unwrap_or_else(|_| DEFAULT_INTERVAL_MS.to_string())
            .parse()
            .expect("LIVENESS_INTERVAL_MS must be a valid u64");

        let stop_timeout_ms: u64 = std::env::var("STOP_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_STOP_TIMEOUT_MS.to_string())
            .parse()
            .expect("STOP_TIMEOUT_MS must be a valid u64");

        Self {
            interval: Duration::from_millis(interval_ms),
            stop_timeout: Duration::from_millis(stop_timeout_ms),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_interval(self.interval)?;
        validate_stop_timeout(self.stop_timeout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RunnerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interval, Duration::from_millis(DEFAULT_INTERVAL_MS));
        assert_eq!(
            config.stop_timeout,
            Duration::from_millis(DEFAULT_STOP_TIMEOUT_MS)
        );
    }

    #[test]
    fn zero_interval_rejected() {
        let config = RunnerConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_stop_timeout_rejected() {
        let config = RunnerConfig {
            stop_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(CoreError::Validation(_)));
    }
}
