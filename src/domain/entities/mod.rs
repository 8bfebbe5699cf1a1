//! Core domain entities.
//!
//! - [`Link`] - A persisted short identifier to URL mapping
//! - [`NewLink`] - Input for creating a link
//!
//! Links are immutable once created, so there is no patch type.

pub mod link;

pub use link::{Link, NewLink};
