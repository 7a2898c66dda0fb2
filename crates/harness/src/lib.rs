//! Action facade for the Cartwheel harness.
//!
//! Every operation is an independent resolve -> wait -> act sequence with no
//! retries, no queuing and no cross-call state beyond the default timeout.
//! The session handle is borrowed from the owning test fixture, which is
//! responsible for creating and quitting it.

pub mod harness;
pub mod model;

pub use harness::Harness;
pub use model::Target;
