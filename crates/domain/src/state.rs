//! Device state — the mutable attributes of the demo device.
//!
//! Power and brew strength vary independently; there are no coupled
//! transitions. Water level is retrievable only — nothing in the control
//! surface can change it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{Timestamp, now};

/// On/off state of the device, `"ON"`/`"OFF"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// Whether the device is powered on.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Wire representation of the state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brew strength mode, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrewStrength {
    Light,
    #[default]
    Medium,
    Strong,
}

impl BrewStrength {
    /// Every strength the device supports, in discovery order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Strong];

    /// Wire representation of the mode value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for BrewStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrewStrength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            other => Err(ValidationError::UnsupportedBrewStrength {
                value: other.to_string(),
            }),
        }
    }
}

/// Water reservoir level, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterLevel {
    Empty,
    Low,
    Half,
    #[default]
    Full,
}

impl WaterLevel {
    /// Wire representation of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Low => "low",
            Self::Half => "half",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of the demo device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    /// On/off state.
    pub power: PowerState,
    /// Selected brew strength.
    pub brew_strength: BrewStrength,
    /// Reservoir level; reported but never settable.
    pub water_level: WaterLevel,
    /// When the state last changed; used as `timeOfSample` in reports.
    pub last_updated: Timestamp,
}

impl DeviceState {
    /// The state a freshly registered device starts in.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            power: PowerState::default(),
            brew_strength: BrewStrength::default(),
            water_level: WaterLevel::default(),
            last_updated: now(),
        }
    }

    /// Set the power state, stamping the change time.
    pub fn set_power(&mut self, power: PowerState, at: Timestamp) {
        self.power = power;
        self.last_updated = at;
    }

    /// Set the brew strength, stamping the change time.
    pub fn set_brew_strength(&mut self, strength: BrewStrength, at: Timestamp) {
        self.brew_strength = strength;
        self.last_updated = at;
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::initial()
    }
}
