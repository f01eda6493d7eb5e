//! In-memory device registry backed by a tokio `RwLock`.
//!
//! State lives only in process memory and resets on restart. That is the
//! intended lifecycle for this demo, not a stand-in for a database.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use brewlink_domain::device::Device;
use brewlink_domain::error::{BrewlinkError, NotFoundError};
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::DeviceState;

use crate::ports::DeviceRegistry;

/// Process-lifetime registry mapping endpoint ids to devices.
#[derive(Default)]
pub struct InMemoryDeviceRegistry {
    devices: RwLock<HashMap<EndpointId, Device>>,
}

impl InMemoryDeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with a single device.
    #[must_use]
    pub fn with_device(device: Device) -> Self {
        let mut devices = HashMap::new();
        devices.insert(device.endpoint_id.clone(), device);
        Self {
            devices: RwLock::new(devices),
        }
    }
}

impl DeviceRegistry for InMemoryDeviceRegistry {
    fn get(
        &self,
        id: &EndpointId,
    ) -> impl Future<Output = Result<Option<Device>, BrewlinkError>> + Send {
        async move { Ok(self.devices.read().await.get(id).cloned()) }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Device>, BrewlinkError>> + Send {
        async move { Ok(self.devices.read().await.values().cloned().collect()) }
    }

    fn update_state(
        &self,
        id: &EndpointId,
        state: DeviceState,
    ) -> impl Future<Output = Result<Device, BrewlinkError>> + Send {
        async move {
            let mut devices = self.devices.write().await;
            let device = devices.get_mut(id).ok_or_else(|| NotFoundError {
                entity: "Device",
                id: id.to_string(),
            })?;
            device.state = state;
            Ok(device.clone())
        }
    }
}
