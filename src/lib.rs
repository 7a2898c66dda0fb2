//! Cartwheel - a thin WebDriver harness plus end-to-end storefront suites.
//!
//! The harness core (locator resolution, wait orchestration, the action
//! facade) lives in the workspace crates and is re-exported here. This crate
//! adds the surrounding fixture machinery: environment configuration, the
//! browser session builder, logging init and reusable flows. The per-site
//! suites live under `tests/` and need a running WebDriver endpoint, so they
//! are `#[ignore]`d by default.

pub mod config;
pub mod flows;
pub mod logging;
pub mod session;

pub use cartwheel_core_types::{HarnessError, WaitCondition, WaitMode, DEFAULT_TIMEOUT};
pub use cartwheel_harness::{Harness, Target};
pub use cartwheel_locator::{Locator, Strategy};
pub use cartwheel_wait::WaitSpec;
