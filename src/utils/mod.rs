//! Helper functions shared by the service and HTTP layers.
//!
//! - [`short_id`] - Validation of caller-supplied short identifiers
//! - [`redirect`] - Browser-safe redirect targets

pub mod redirect;
pub mod short_id;
