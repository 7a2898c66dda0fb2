//! Locator resolution - translating `(kind, value, options)` descriptors
//! into concrete WebDriver queries.
//!
//! Two patterns are supported:
//! - explicit strategies (`css`, `id`, `className`/`class`, `xpath`, `name`,
//!   `linkText`, `partialLinkText`), mapped 1:1 to native query strategies
//! - the tag + visible text convention: any other kind is treated as an HTML
//!   tag and the value as the element's normalized visible text, compiled to
//!   an XPath expression
//!
//! Resolution is a pure function: no side effects, same input always yields
//! the same query.

pub mod types;
pub mod xpath;

pub use types::{Locator, Strategy};
