//! # brewlink-adapter-virtual
//!
//! Virtual/demo device adapter that stands in for real coffee-maker
//! hardware.
//!
//! ## Provided devices
//!
//! | Device | Endpoint ID | Behaviour |
//! |--------|-------------|-----------|
//! | Smart Coffee Maker | `coffee_maker_123` | Accepts power and brew-strength commands, logs the actuation |
//!
//! ## Dependency rule
//!
//! Depends on `brewlink-app` (port traits) and `brewlink-domain` only.

use std::future::Future;

use brewlink_app::ports::DeviceActuator;
use brewlink_domain::device::Device;
use brewlink_domain::error::{BrewlinkError, ValidationError};
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::{BrewStrength, PowerState};

/// Endpoint id of the demo coffee maker.
pub const DEFAULT_ENDPOINT_ID: &str = "coffee_maker_123";

/// Friendly name of the demo coffee maker.
pub const DEFAULT_FRIENDLY_NAME: &str = "My Smart Coffee Maker";

/// A simulated coffee maker.
///
/// "Actuation" is a structured log line; there is no hardware and no state
/// here — the registry is the single source of truth for device state.
pub struct VirtualCoffeeMaker {
    endpoint_id: EndpointId,
    friendly_name: String,
}

impl Default for VirtualCoffeeMaker {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT_ID, DEFAULT_FRIENDLY_NAME)
    }
}

impl VirtualCoffeeMaker {
    /// Create a coffee maker with the given identity.
    pub fn new(endpoint_id: impl Into<EndpointId>, friendly_name: impl Into<String>) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            friendly_name: friendly_name.into(),
        }
    }

    /// The endpoint id this coffee maker answers to.
    #[must_use]
    pub fn endpoint_id(&self) -> &EndpointId {
        &self.endpoint_id
    }

    /// Produce the [`Device`] descriptor used to seed the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the configured friendly
    /// name is empty.
    pub fn descriptor(&self) -> Result<Device, ValidationError> {
        Device::builder()
            .endpoint_id(self.endpoint_id.clone())
            .friendly_name(&self.friendly_name)
            .build()
    }
}

impl DeviceActuator for VirtualCoffeeMaker {
    fn set_power(
        &self,
        id: &EndpointId,
        power: PowerState,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
        tracing::info!(endpoint = %id, %power, "actuating physical device: set power");
        async { Ok(()) }
    }

    fn set_brew_strength(
        &self,
        id: &EndpointId,
        strength: BrewStrength,
    ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
        tracing::info!(endpoint = %id, %strength, "actuating physical device: set brew strength");
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlink_domain::device::DisplayCategory;

    #[test]
    fn should_describe_the_demo_coffee_maker() {
        let device = VirtualCoffeeMaker::default().descriptor().unwrap();
        assert_eq!(device.endpoint_id.as_str(), "coffee_maker_123");
        assert_eq!(device.friendly_name, "My Smart Coffee Maker");
        assert_eq!(device.display_category, DisplayCategory::CoffeeMaker);
        assert_eq!(device.manufacturer_name, "My Awesome IoT Company");
    }

    #[test]
    fn should_reject_empty_friendly_name() {
        let maker = VirtualCoffeeMaker::new("coffee_maker_123", "");
        assert!(maker.descriptor().is_err());
    }

    #[tokio::test]
    async fn should_accept_power_commands() {
        let maker = VirtualCoffeeMaker::default();
        let result = maker
            .set_power(maker.endpoint_id(), PowerState::On)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_accept_brew_strength_commands() {
        let maker = VirtualCoffeeMaker::default();
        let result = maker
            .set_brew_strength(maker.endpoint_id(), BrewStrength::Strong)
            .await;
        assert!(result.is_ok());
    }
}
