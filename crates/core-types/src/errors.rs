//! Error taxonomy shared by the harness crates.

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

use crate::WaitCondition;

/// Unified error type surfaced by every harness operation.
///
/// Failures are never retried or swallowed inside the harness: each variant
/// reaches the immediate caller synchronously.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A wait ran out of time before its readiness condition held.
    /// Carries the full locator and wait context for diagnosis. The
    /// condition is the one the caller asked for, even when the underlying
    /// find phase is what failed.
    #[error("wait {condition} timed out for {strategy}=\"{value}\" after {timeout_ms}ms: {detail}")]
    WaitTimeout {
        strategy: String,
        value: String,
        condition: WaitCondition,
        timeout_ms: u64,
        /// Message of the underlying native timeout error.
        detail: String,
    },

    /// A wait mode string that is not one of the recognized modes.
    /// Programmer error; never retried.
    #[error("unsupported wait mode \"{0}\" (expected Appeared, Disappeared or Stale)")]
    UnsupportedWaitMode(String),

    /// Native client error passed through unmodified (click intercepted,
    /// stale reference during an action, session failures).
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
}

impl HarnessError {
    pub fn wait_timeout(
        strategy: &str,
        value: &str,
        condition: impl Into<WaitCondition>,
        timeout: Duration,
        detail: impl Into<String>,
    ) -> Self {
        Self::WaitTimeout {
            strategy: strategy.to_string(),
            value: value.to_string(),
            condition: condition.into(),
            timeout_ms: timeout.as_millis() as u64,
            detail: detail.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::WaitTimeout { .. })
    }
}
