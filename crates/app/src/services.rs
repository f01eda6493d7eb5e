//! Application services — one use-case struct per concern.

pub mod device_service;

pub use device_service::DeviceService;
