//! # brewlink-domain
//!
//! Pure domain model for the brewlink voice-assistant integration demo.
//!
//! ## Responsibilities
//! - Foundational types: endpoint identifiers, error conventions, timestamps
//! - Define the **Device** descriptor surfaced through platform discovery
//! - Define **`DeviceState`** (power, brew strength, water level) and its
//!   mutation rules
//! - Contain all invariant enforcement (supported brew strengths, naming)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod id;
pub mod state;
pub mod time;
