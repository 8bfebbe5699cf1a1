//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and external collaborators behind a
//! small API consumed by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Registration, resolution and QR codes

pub mod services;
