//! Reusable multi-step flows shared by the suites.

pub mod sign_on;

pub use sign_on::sign_on;
