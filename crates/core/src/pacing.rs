//! Pacing constants and validation for the liveness loop.
//!
//! Pure functions and constants shared by the runner, its configuration,
//! and their tests.

use std::time::Duration;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default time between loop iterations.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Default bound on how long `stop` waits for the loop task to finish
/// before abandoning it.
pub const DEFAULT_STOP_TIMEOUT_MS: u64 = 5000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a loop interval.
///
/// Rules:
/// - Must be strictly positive. A zero interval would spin the loop and
///   flood the watchdog.
pub fn validate_interval(interval: Duration) -> Result<(), CoreError> {
    if interval.is_zero() {
        return Err(CoreError::Validation(
            "Interval must be strictly positive".to_string(),
        ));
    }
    Ok(())
}

/// Validate a stop timeout.
///
/// Rules:
/// - Must be strictly positive. A zero timeout would turn every `stop`
///   into an immediate abandon and the loop would never be observed
///   finishing.
pub fn validate_stop_timeout(timeout: Duration) -> Result<(), CoreError> {
    if timeout.is_zero() {
        return Err(CoreError::Validation(
            "Stop timeout must be strictly positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_interval ----------------------------------------------------

    #[test]
    fn positive_interval_accepted() {
        assert!(validate_interval(Duration::from_millis(1)).is_ok());
    }

    #[test]
    fn default_interval_accepted() {
        assert!(validate_interval(Duration::from_millis(DEFAULT_INTERVAL_MS)).is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(validate_interval(Duration::ZERO).is_err());
    }

    // -- validate_stop_timeout ------------------------------------------------

    #[test]
    fn positive_stop_timeout_accepted() {
        assert!(validate_stop_timeout(Duration::from_millis(DEFAULT_STOP_TIMEOUT_MS)).is_ok());
    }

    #[test]
    fn zero_stop_timeout_rejected() {
        assert!(validate_stop_timeout(Duration::ZERO).is_err());
    }
}
