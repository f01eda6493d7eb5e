//! Shared application state for axum handlers.

use std::sync::Arc;

use brewlink_app::ports::{DeviceActuator, DeviceRegistry};
use brewlink_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the registry and actuator types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, A> {
    /// Discovery/control/state use-cases.
    pub device_service: Arc<DeviceService<R, A>>,
}

impl<R, A> Clone for AppState<R, A> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<R, A> AppState<R, A>
where
    R: DeviceRegistry + Send + Sync + 'static,
    A: DeviceActuator + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(device_service: DeviceService<R, A>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
