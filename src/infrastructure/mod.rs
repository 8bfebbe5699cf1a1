//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the collaborators the link service depends on.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory link repositories
//! - [`id_generator`] - Random short identifier generation
//! - [`qr`] - QR code rendering to PNG data URIs

pub mod id_generator;
pub mod persistence;
pub mod qr;
