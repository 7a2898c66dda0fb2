//! Wait specification types.

use std::time::Duration;

use cartwheel_core_types::WaitMode;

/// Cadence handed to the client's native poller.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A fully resolved wait: what to wait for and how long.
///
/// Timeout precedence (call-site override first, default second) is decided
/// by the caller before this is built; the engine never consults a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSpec {
    pub mode: WaitMode,
    pub timeout: Duration,
}

impl WaitSpec {
    pub fn new(mode: WaitMode, timeout: Duration) -> Self {
        Self { mode, timeout }
    }
}
