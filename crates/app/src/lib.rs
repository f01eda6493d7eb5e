//! # brewlink-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - [`ports::DeviceRegistry`] — lookup and state updates for devices
//!   - [`ports::DeviceActuator`] — pushing commands towards the (simulated)
//!     physical device
//! - Define **driving/inbound ports** as use-case structs:
//!   - [`services::device_service::DeviceService`] — discovery, power and
//!     mode control, state reporting
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - [`registry::InMemoryDeviceRegistry`] — the process-lifetime registry
//! - Orchestrate domain objects without knowing *how* transport or actuation
//!   works
//!
//! ## Dependency rule
//! Depends on `brewlink-domain` only (plus `tokio::sync` for the registry
//! lock). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod registry;
pub mod services;
