//! # brewlink-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the two assistant-platform endpoints
//!   (`/smart-home/discovery`, `/smart-home/control`)
//! - Parse the platform's directive envelope into typed commands at the
//!   boundary (driving adapter)
//! - Map application results back into the platform's event/context
//!   response schema
//! - Map domain errors onto HTTP status codes with JSON error bodies
//!
//! ## Dependency rule
//! Depends on `brewlink-app` (for port traits and services) and
//! `brewlink-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod protocol;
pub mod router;
pub mod state;
