//! Data Transfer Objects for API requests and responses.
//!
//! Field names are camelCase on the wire (`shortId`, `originalUrl`) to match
//! the frontend contract.

pub mod health;
pub mod link;
pub mod qrcode;
pub mod shorten;
