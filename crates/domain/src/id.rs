//! Endpoint identifier — the platform-facing id of a device.
//!
//! Unlike internal surrogate keys, endpoint ids are chosen by the integration
//! and must remain stable across discoveries, so they are plain strings
//! rather than generated UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier a device is known by on the assistant platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(String);

impl EndpointId {
    /// Wrap an endpoint id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EndpointId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EndpointId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_string() {
        let id = EndpointId::new("coffee_maker_123");
        assert_eq!(id.to_string(), "coffee_maker_123");
        assert_eq!(id.as_str(), "coffee_maker_123");
    }

    #[test]
    fn should_compare_equal_when_ids_match() {
        assert_eq!(
            EndpointId::from("coffee_maker_123"),
            EndpointId::new(String::from("coffee_maker_123"))
        );
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = EndpointId::new("coffee_maker_123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"coffee_maker_123\"");
        let parsed: EndpointId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
