//! Actuator port — pushing accepted commands towards the physical device.
//!
//! In this demo the only implementation is the virtual coffee maker, which
//! logs instead of driving hardware. The port exists so the control flow
//! reads the same as it would with a real device behind it.

use std::future::Future;

use brewlink_domain::error::BrewlinkError;
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::{BrewStrength, PowerState};

/// Drives the device a control directive targets.
pub trait DeviceActuator {
    /// Apply a power change to the device.
    fn set_power(
        &self,
        id: &EndpointId,
        power: PowerState,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send;

    /// Apply a brew-strength change to the device.
    fn set_brew_strength(
        &self,
        id: &EndpointId,
        strength: BrewStrength,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send;
}

impl<T: DeviceActuator + Send + Sync> DeviceActuator for std::sync::Arc<T> {
    fn set_power(
        &self,
        id: &EndpointId,
        power: PowerState,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
        (**self).set_power(id, power)
    }

    fn set_brew_strength(
        &self,
        id: &EndpointId,
        strength: BrewStrength,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
        (**self).set_brew_strength(id, strength)
    }
}
