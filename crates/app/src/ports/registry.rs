//! Registry port — lookup and state updates for registered devices.

use std::future::Future;

use brewlink_domain::device::Device;
use brewlink_domain::error::BrewlinkError;
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::DeviceState;

/// Holds the devices this integration exposes to the platform.
///
/// The registry owns device descriptors and their current state. Devices are
/// registered once at startup; only state is mutated afterwards.
pub trait DeviceRegistry {
    /// Fetch one device by endpoint id.
    fn get(
        &self,
        id: &EndpointId,
    ) -> impl Future<Output = Result<Option<Device>, BrewlinkError>> + Send;

    /// List every registered device.
    fn list(&self) -> impl Future<Output = Result<Vec<Device>, BrewlinkError>> + Send;

    /// Replace the state of an existing device, returning the updated device.
    fn update_state(
        &self,
        id: &EndpointId,
        state: DeviceState,
    ) -> impl Future<Output = Result<Device, BrewlinkError>> + Send;
}

impl<T: DeviceRegistry + Send + Sync> DeviceRegistry for std::sync::Arc<T> {
    fn get(
        &self,
        id: &EndpointId,
    ) -> impl Future<Output = Result<Option<Device>, BrewlinkError>> + Send {
        (**self).get(id)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Device>, BrewlinkError>> + Send {
        (**self).list()
    }

    fn update_state(
        &self,
        id: &EndpointId,
        state: DeviceState,
    ) -> impl Future<Output = Result<Device, BrewlinkError>> + Send {
        (**self).update_state(id, state)
    }
}
