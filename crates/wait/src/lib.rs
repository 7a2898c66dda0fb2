//! Wait orchestration for the Cartwheel harness.
//!
//! Thin composition over the WebDriver client's native wait predicates:
//! element queries poll through `ElementQuery` and staleness through
//! `ElementWaiter`. The engine adds no poll loop, no backoff schedule and
//! no retries of its own - a single wait attempt per call, ending either
//! with a readiness-confirmed handle or a timeout error that names the
//! locator, the requested condition and the timeout that failed.

pub mod engine;
pub mod types;

pub use engine::{appeared, clickable, disappeared, present, stale, wait_until};
pub use types::{WaitSpec, POLL_INTERVAL};
