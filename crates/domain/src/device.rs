//! Device — the descriptor and state of one endpoint exposed to the platform.
//!
//! The demo registers exactly one device at startup and never creates or
//! deletes devices afterwards; only [`DeviceState`] is mutable.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::EndpointId;
use crate::state::DeviceState;

/// Display category reported to the platform for icon/grouping purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    #[default]
    CoffeeMaker,
}

impl DisplayCategory {
    /// Wire representation of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CoffeeMaker => "COFFEE_MAKER",
        }
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device exposed through discovery and addressed by control directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Stable platform-facing identifier.
    pub endpoint_id: EndpointId,
    /// Name spoken/shown to the user.
    pub friendly_name: String,
    /// Short human-readable description.
    pub description: String,
    /// Vendor name shown during account linking.
    pub manufacturer_name: String,
    /// Platform display category.
    pub display_category: DisplayCategory,
    /// Mutable device state.
    pub state: DeviceState,
}

impl Device {
    /// Start building a device descriptor.
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the friendly name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.friendly_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    endpoint_id: Option<EndpointId>,
    friendly_name: Option<String>,
    description: Option<String>,
    manufacturer_name: Option<String>,
    display_category: DisplayCategory,
}

impl DeviceBuilder {
    /// Set the endpoint id.
    #[must_use]
    pub fn endpoint_id(mut self, id: impl Into<EndpointId>) -> Self {
        self.endpoint_id = Some(id.into());
        self
    }

    /// Set the friendly name.
    #[must_use]
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the manufacturer name.
    #[must_use]
    pub fn manufacturer_name(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer_name = Some(manufacturer.into());
        self
    }

    /// Set the display category.
    #[must_use]
    pub fn display_category(mut self, category: DisplayCategory) -> Self {
        self.display_category = category;
        self
    }

    /// Build the device with initial state, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if the endpoint id is unset
    /// and [`ValidationError::EmptyName`] if the friendly name is missing or
    /// empty.
    pub fn build(self) -> Result<Device, ValidationError> {
        let endpoint_id = self.endpoint_id.ok_or(ValidationError::MissingField {
            field: "endpoint_id",
        })?;
        let friendly_name = self.friendly_name.ok_or(ValidationError::EmptyName)?;
        let display_category = self.display_category;

        let device = Device {
            endpoint_id,
            friendly_name,
            description: self
                .description
                .unwrap_or_else(|| format!("My smart {display_category}")),
            manufacturer_name: self
                .manufacturer_name
                .unwrap_or_else(|| "My Awesome IoT Company".to_string()),
            display_category,
            state: DeviceState::initial(),
        };
        device.validate()?;
        Ok(device)
    }
}
