//! Normalized action target.

use std::time::Duration;

use cartwheel_locator::Locator;

/// What an action operates on: a locator plus per-call options.
///
/// Every calling shape - a `(kind, value)` pair, a typed [`Locator`] or the
/// builder methods - normalizes into this structure before any resolution or
/// waiting runs, so the internals never branch on how they were called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub locator: Locator,
    /// Per-call timeout override; `None` falls back to the harness default.
    pub timeout: Option<Duration>,
}

impl Target {
    pub fn new(locator: Locator) -> Self {
        Self {
            locator,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Tag + visible text mode only: substring match instead of exact text.
    pub fn contains(mut self, contains: bool) -> Self {
        self.locator = self.locator.contains(contains);
        self
    }

    /// The one place timeout precedence is decided: call-site override
    /// first, the supplied default second.
    pub fn timeout_or(&self, default: Duration) -> Duration {
        self.timeout.unwrap_or(default)
    }
}

impl From<Locator> for Target {
    fn from(locator: Locator) -> Self {
        Target::new(locator)
    }
}

impl From<(&str, &str)> for Target {
    fn from((kind, value): (&str, &str)) -> Self {
        Target::new(Locator::new(kind, value))
    }
}

impl From<(&str, &str, Duration)> for Target {
    fn from((kind, value, timeout): (&str, &str, Duration)) -> Self {
        Target::new(Locator::new(kind, value)).with_timeout(timeout)
    }
}
