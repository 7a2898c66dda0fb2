//! Shared primitives for the Cartwheel harness crates.
//!
//! Holds the wait-mode vocabulary and the error taxonomy that every other
//! crate reports through. Nothing here talks to a browser.

pub mod errors;

pub use errors::HarnessError;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Process-wide default wait timeout. Call sites may override per call;
/// otherwise every wait falls back to this.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// The three wait semantics the engine exposes.
///
/// - `Appeared`: element exists and is visible
/// - `Disappeared`: no visible element matches (removed or merely hidden)
/// - `Stale`: a previously located handle is detached from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitMode {
    Appeared,
    Disappeared,
    Stale,
}

impl WaitMode {
    pub fn name(&self) -> &'static str {
        match self {
            WaitMode::Appeared => "Appeared",
            WaitMode::Disappeared => "Disappeared",
            WaitMode::Stale => "Stale",
        }
    }
}

impl fmt::Display for WaitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaitMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Appeared" => Ok(WaitMode::Appeared),
            "Disappeared" => Ok(WaitMode::Disappeared),
            "Stale" => Ok(WaitMode::Stale),
            other => Err(HarnessError::UnsupportedWaitMode(other.to_string())),
        }
    }
}

/// The readiness condition a wait was servicing when it timed out.
///
/// Wider than [`WaitMode`]: timeout errors also come out of the bare
/// presence lookup and the clickable gate that runs before every click,
/// neither of which is a caller-selectable mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitCondition {
    Present,
    Appeared,
    Disappeared,
    Stale,
    Clickable,
}

impl WaitCondition {
    pub fn name(&self) -> &'static str {
        match self {
            WaitCondition::Present => "Present",
            WaitCondition::Appeared => "Appeared",
            WaitCondition::Disappeared => "Disappeared",
            WaitCondition::Stale => "Stale",
            WaitCondition::Clickable => "Clickable",
        }
    }
}

impl fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<WaitMode> for WaitCondition {
    fn from(mode: WaitMode) -> Self {
        match mode {
            WaitMode::Appeared => WaitCondition::Appeared,
            WaitMode::Disappeared => WaitCondition::Disappeared,
            WaitMode::Stale => WaitCondition::Stale,
        }
    }
}
