//! Device service — use-cases behind the discovery and control endpoints.

use brewlink_domain::device::Device;
use brewlink_domain::error::{BrewlinkError, NotFoundError};
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::{BrewStrength, PowerState};
use brewlink_domain::time::now;

use crate::ports::{DeviceActuator, DeviceRegistry};

/// Application service for device discovery, control, and state reporting.
pub struct DeviceService<R, A> {
    registry: R,
    actuator: A,
}

impl<R: DeviceRegistry, A: DeviceActuator> DeviceService<R, A> {
    /// Create a new service backed by the given registry and actuator.
    pub fn new(registry: R, actuator: A) -> Self {
        Self { registry, actuator }
    }

    /// List every device for a discovery response.
    ///
    /// Read-only; repeated calls return the same descriptors regardless of
    /// interleaved control calls.
    ///
    /// # Errors
    ///
    /// Propagates registry errors.
    #[tracing::instrument(skip(self))]
    pub async fn discover_devices(&self) -> Result<Vec<Device>, BrewlinkError> {
        self.registry.list().await
    }

    /// Turn a device on or off, returning the updated device.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlinkError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self), fields(endpoint = %id, power = %power))]
    pub async fn set_power(
        &self,
        id: &EndpointId,
        power: PowerState,
    ) -> Result<Device, BrewlinkError> {
        let device = self.get_device(id).await?;
        self.actuator.set_power(id, power).await?;

        let mut state = device.state;
        state.set_power(power, now());
        self.registry.update_state(id, state).await
    }

    /// Change a device's brew strength, returning the updated device.
    ///
    /// The strength is already a domain value here; unsupported values are
    /// rejected at the boundary before this method is reached.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlinkError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self), fields(endpoint = %id, strength = %strength))]
    pub async fn set_brew_strength(
        &self,
        id: &EndpointId,
        strength: BrewStrength,
    ) -> Result<Device, BrewlinkError> {
        let device = self.get_device(id).await?;
        self.actuator.set_brew_strength(id, strength).await?;

        let mut state = device.state;
        state.set_brew_strength(strength, now());
        self.registry.update_state(id, state).await
    }

    /// Read a device's current state without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlinkError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self), fields(endpoint = %id))]
    pub async fn report_state(&self, id: &EndpointId) -> Result<Device, BrewlinkError> {
        self.get_device(id).await
    }

    async fn get_device(&self, id: &EndpointId) -> Result<Device, BrewlinkError> {
        self.registry.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use brewlink_domain::state::WaterLevel;

    use crate::registry::InMemoryDeviceRegistry;

    /// Actuator stub that records every command it receives.
    #[derive(Default)]
    struct RecordingActuator {
        commands: Mutex<Vec<String>>,
    }

    impl RecordingActuator {
        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl DeviceActuator for RecordingActuator {
        fn set_power(
            &self,
            id: &EndpointId,
            power: PowerState,
        ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
            self.commands
                .lock()
                .unwrap()
                .push(format!("{id}: set power {power}"));
            async { Ok(()) }
        }

        fn set_brew_strength(
            &self,
            id: &EndpointId,
            strength: BrewStrength,
        ) -> impl Future<Output = Result<(), BrewlinkError>> + Send {
            self.commands
                .lock()
                .unwrap()
                .push(format!("{id}: set brew strength {strength}"));
            async { Ok(()) }
        }
    }

    fn coffee_maker() -> Device {
        Device::builder()
            .endpoint_id("coffee_maker_123")
            .friendly_name("My Smart Coffee Maker")
            .build()
            .unwrap()
    }

    fn make_service() -> DeviceService<InMemoryDeviceRegistry, RecordingActuator> {
        DeviceService::new(
            InMemoryDeviceRegistry::with_device(coffee_maker()),
            RecordingActuator::default(),
        )
    }

    fn endpoint() -> EndpointId {
        EndpointId::from("coffee_maker_123")
    }

    #[tokio::test]
    async fn should_discover_seeded_device() {
        let svc = make_service();
        let devices = svc.discover_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].friendly_name, "My Smart Coffee Maker");
    }

    #[tokio::test]
    async fn should_report_initial_state_before_any_mutation() {
        let svc = make_service();
        let device = svc.report_state(&endpoint()).await.unwrap();
        assert_eq!(device.state.power, PowerState::Off);
        assert_eq!(device.state.brew_strength, BrewStrength::Medium);
        assert_eq!(device.state.water_level, WaterLevel::Full);
    }

    #[tokio::test]
    async fn should_make_power_change_visible_to_later_reports() {
        let svc = make_service();
        for power in [PowerState::On, PowerState::Off] {
            svc.set_power(&endpoint(), power).await.unwrap();
            let device = svc.report_state(&endpoint()).await.unwrap();
            assert_eq!(device.state.power, power);
        }
    }

    #[tokio::test]
    async fn should_make_brew_strength_change_visible_to_later_reports() {
        let svc = make_service();
        for strength in BrewStrength::ALL {
            svc.set_brew_strength(&endpoint(), strength).await.unwrap();
            let device = svc.report_state(&endpoint()).await.unwrap();
            assert_eq!(device.state.brew_strength, strength);
        }
    }

    #[tokio::test]
    async fn should_leave_brew_strength_untouched_when_setting_power() {
        let svc = make_service();
        svc.set_brew_strength(&endpoint(), BrewStrength::Strong)
            .await
            .unwrap();
        let device = svc.set_power(&endpoint(), PowerState::On).await.unwrap();
        assert_eq!(device.state.brew_strength, BrewStrength::Strong);
        assert!(device.state.power.is_on());
    }

    #[tokio::test]
    async fn should_leave_power_untouched_when_setting_brew_strength() {
        let svc = make_service();
        svc.set_power(&endpoint(), PowerState::On).await.unwrap();
        let device = svc
            .set_brew_strength(&endpoint(), BrewStrength::Light)
            .await
            .unwrap();
        assert!(device.state.power.is_on());
        assert_eq!(device.state.brew_strength, BrewStrength::Light);
    }

    #[tokio::test]
    async fn should_forward_commands_to_actuator() {
        let svc = make_service();
        svc.set_power(&endpoint(), PowerState::On).await.unwrap();
        svc.set_brew_strength(&endpoint(), BrewStrength::Strong)
            .await
            .unwrap();

        let commands = svc.actuator.commands();
        assert_eq!(
            commands,
            vec![
                "coffee_maker_123: set power ON",
                "coffee_maker_123: set brew strength strong",
            ]
        );
    }

    #[tokio::test]
    async fn should_not_actuate_when_device_is_unknown() {
        let svc = make_service();
        let unknown = EndpointId::from("toaster_9");

        let result = svc.set_power(&unknown, PowerState::On).await;
        assert!(matches!(result, Err(BrewlinkError::NotFound(_))));
        assert!(svc.actuator.commands().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_reporting_unknown_device() {
        let svc = make_service();
        let result = svc.report_state(&EndpointId::from("toaster_9")).await;
        assert!(matches!(result, Err(BrewlinkError::NotFound(_))));
    }
}
