//! Assistant-platform wire schema.
//!
//! Typed request and response payloads for the smart-home skill API,
//! `camelCase` on the wire, `payloadVersion` 3. Every shape the two
//! endpoints accept or produce is an explicit struct here; handlers never
//! assemble free-form JSON.

use serde::{Deserialize, Serialize};

use brewlink_domain::device::Device;
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::BrewStrength;
use brewlink_domain::time::Timestamp;

/// Payload version sent in every event header.
pub const PAYLOAD_VERSION: &str = "3";

/// Capability descriptor type used by the platform.
pub const INTERFACE_TYPE: &str = "AlexaInterface";

/// Namespace of generic platform events (state reports).
pub const NAMESPACE_ALEXA: &str = "Alexa";
/// Namespace of the discovery exchange.
pub const NAMESPACE_DISCOVERY: &str = "Alexa.Discovery";
/// Namespace of power directives and properties.
pub const NAMESPACE_POWER: &str = "Alexa.PowerController";
/// Namespace of mode directives and properties.
pub const NAMESPACE_MODE: &str = "Alexa.ModeController";
/// Namespace of range properties (water level).
pub const NAMESPACE_RANGE: &str = "Alexa.RangeController";
/// Namespace of inbound state-report queries.
pub const NAMESPACE_STATE_REPORT: &str = "Alexa.StateReport";

/// Locale used for capability friendly names.
pub const LOCALE_EN_US: &str = "en-US";

/// The mode-controller instance name for a device's brew strength.
#[must_use]
pub fn brew_strength_instance(id: &EndpointId) -> String {
    format!("BrewStrength.{id}")
}

/// The range-controller instance name for a device's water level.
#[must_use]
pub fn water_level_instance(id: &EndpointId) -> String {
    format!("WaterLevel.{id}")
}

// ---------------------------------------------------------------------------
// Inbound: control directives
// ---------------------------------------------------------------------------

/// Body of `POST /smart-home/control`.
#[derive(Debug, Deserialize)]
pub struct ControlRequest {
    /// The directive envelope.
    pub directive: Directive,
}

/// A single directive: header, target endpoint, and payload.
#[derive(Debug, Deserialize)]
pub struct Directive {
    /// Namespace/name pair selecting the operation.
    pub header: DirectiveHeader,
    /// Target endpoint; required for every operation this demo supports.
    #[serde(default)]
    pub endpoint: Option<DirectiveEndpoint>,
    /// Operation-specific payload, interpreted per directive.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Directive header fields this integration reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveHeader {
    /// Interface namespace, e.g. `Alexa.PowerController`.
    pub namespace: String,
    /// Operation name, e.g. `TurnOn`.
    pub name: String,
    /// Capability instance for mode directives.
    #[serde(default)]
    pub instance: Option<String>,
    /// Opaque token echoed back in the response header.
    #[serde(default)]
    pub correlation_token: Option<String>,
}

/// Endpoint reference inside a directive.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveEndpoint {
    /// Platform-facing device id.
    pub endpoint_id: String,
}

/// Payload of a `SetMode` directive.
#[derive(Debug, Deserialize)]
pub struct SetModePayload {
    /// Requested mode.
    pub mode: ModeValue,
}

/// A mode value as sent by the platform.
#[derive(Debug, Deserialize)]
pub struct ModeValue {
    /// Raw mode string; validated against the supported set.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Outbound: discovery
// ---------------------------------------------------------------------------

/// Body of the discovery response.
#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    /// The `Discover.Response` event.
    pub event: DiscoveryEvent,
}

/// Discovery event wrapper.
#[derive(Debug, Serialize)]
pub struct DiscoveryEvent {
    /// Event header.
    pub header: DiscoveryHeader,
    /// Endpoint list.
    pub payload: DiscoveryPayload,
}

/// Header of the discovery response event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryHeader {
    /// Always [`NAMESPACE_DISCOVERY`].
    pub namespace: &'static str,
    /// Always `Discover.Response`.
    pub name: &'static str,
    /// Always [`PAYLOAD_VERSION`].
    pub payload_version: &'static str,
}

impl Default for DiscoveryHeader {
    fn default() -> Self {
        Self {
            namespace: NAMESPACE_DISCOVERY,
            name: "Discover.Response",
            payload_version: PAYLOAD_VERSION,
        }
    }
}

/// Payload of the discovery response.
#[derive(Debug, Serialize)]
pub struct DiscoveryPayload {
    /// One descriptor per registered device.
    pub endpoints: Vec<EndpointDescriptor>,
}

/// One discoverable endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Stable device id.
    pub endpoint_id: String,
    /// Name spoken/shown to the user.
    pub friendly_name: String,
    /// Short description.
    pub description: String,
    /// Vendor name.
    pub manufacturer_name: String,
    /// Display categories for grouping/icons.
    pub display_categories: Vec<String>,
    /// Supported capabilities.
    pub capabilities: Vec<Capability>,
}

impl EndpointDescriptor {
    /// Describe a device with its power and brew-strength capabilities.
    #[must_use]
    pub fn from_device(device: &Device) -> Self {
        Self {
            endpoint_id: device.endpoint_id.to_string(),
            friendly_name: device.friendly_name.clone(),
            description: device.description.clone(),
            manufacturer_name: device.manufacturer_name.clone(),
            display_categories: vec![device.display_category.to_string()],
            capabilities: vec![
                Capability::power_controller(),
                Capability::brew_strength_controller(&device.endpoint_id),
            ],
        }
    }
}

/// One capability entry in an endpoint descriptor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    /// Always [`INTERFACE_TYPE`].
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Interface namespace.
    pub interface: &'static str,
    /// Interface version.
    pub version: &'static str,
    /// Capability instance, for multi-instance interfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Friendly names for the capability itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_resources: Option<Resources>,
    /// Which properties the capability reports.
    pub properties: CapabilityProperties,
    /// Mode configuration, for mode controllers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ModeConfiguration>,
}

impl Capability {
    /// The on/off capability.
    #[must_use]
    pub fn power_controller() -> Self {
        Self {
            kind: INTERFACE_TYPE,
            interface: NAMESPACE_POWER,
            version: "3",
            instance: None,
            capability_resources: None,
            properties: CapabilityProperties::retrievable(PROPERTY_POWER_STATE),
            configuration: None,
        }
    }

    /// The brew-strength mode capability for the given endpoint.
    #[must_use]
    pub fn brew_strength_controller(id: &EndpointId) -> Self {
        Self {
            kind: INTERFACE_TYPE,
            interface: NAMESPACE_MODE,
            version: "1.0",
            instance: Some(brew_strength_instance(id)),
            capability_resources: Some(Resources::named("brew strength")),
            properties: CapabilityProperties::retrievable(PROPERTY_MODE),
            configuration: Some(ModeConfiguration {
                ordered: false,
                supported_modes: BrewStrength::ALL
                    .iter()
                    .map(|strength| SupportedMode {
                        value: strength.as_str(),
                        mode_resources: Resources::named(strength.as_str()),
                    })
                    .collect(),
            }),
        }
    }
}

/// Property support declaration inside a capability.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProperties {
    /// Property names the capability exposes.
    pub supported: Vec<SupportedProperty>,
    /// Whether the platform may query the property.
    pub retrievable: bool,
    /// Whether the integration pushes changes unprompted.
    pub proactively_reported: bool,
}

impl CapabilityProperties {
    /// A single retrievable, not proactively reported property.
    #[must_use]
    pub fn retrievable(name: &'static str) -> Self {
        Self {
            supported: vec![SupportedProperty { name }],
            retrievable: true,
            proactively_reported: false,
        }
    }
}

/// A property name entry.
#[derive(Debug, Serialize)]
pub struct SupportedProperty {
    /// Property name, e.g. `powerState`.
    pub name: &'static str,
}

/// Localised friendly names for a capability or mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    /// The friendly-name list.
    pub friendly_names: Vec<FriendlyName>,
}

impl Resources {
    /// A single `en-US` friendly name.
    #[must_use]
    pub fn named(text: impl Into<String>) -> Self {
        Self {
            friendly_names: vec![FriendlyName {
                value: FriendlyNameValue {
                    text: text.into(),
                    locale: LOCALE_EN_US,
                },
            }],
        }
    }
}

/// One friendly-name entry.
#[derive(Debug, Serialize)]
pub struct FriendlyName {
    /// The localised value.
    pub value: FriendlyNameValue,
}

/// Text plus locale of a friendly name.
#[derive(Debug, Serialize)]
pub struct FriendlyNameValue {
    /// Display text.
    pub text: String,
    /// BCP-47 locale tag.
    pub locale: &'static str,
}

/// Mode-controller configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfiguration {
    /// Whether the modes form an ordered range.
    pub ordered: bool,
    /// The supported mode values.
    pub supported_modes: Vec<SupportedMode>,
}

/// One supported mode value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedMode {
    /// Wire value of the mode.
    pub value: &'static str,
    /// Friendly names for the mode.
    pub mode_resources: Resources,
}

// ---------------------------------------------------------------------------
// Outbound: control responses and state reports
// ---------------------------------------------------------------------------

/// Property names reported by this integration.
pub const PROPERTY_POWER_STATE: &str = "powerState";
/// Mode property name.
pub const PROPERTY_MODE: &str = "mode";
/// Range property name (water level).
pub const PROPERTY_RANGE_VALUE: &str = "rangeValue";

/// Body of a successful set-power/set-mode response.
#[derive(Debug, Serialize)]
pub struct ControlResponse {
    /// The `<name>Response` event.
    pub event: ControlEvent,
    /// Changed properties.
    pub context: Context,
}

/// Event half of a control response.
#[derive(Debug, Serialize)]
pub struct ControlEvent {
    /// Response header.
    pub header: ResponseHeader,
    /// The endpoint the directive targeted.
    pub endpoint: ResponseEndpoint,
    /// Always empty for control responses.
    pub payload: EmptyPayload,
}

/// Body of a state-report response.
#[derive(Debug, Serialize)]
pub struct StateReportResponse {
    /// The `StateReport` event.
    pub event: StateReportEvent,
}

/// Event half of a state report.
#[derive(Debug, Serialize)]
pub struct StateReportEvent {
    /// Response header.
    pub header: ResponseHeader,
    /// The endpoint the query targeted.
    pub endpoint: ResponseEndpoint,
    /// The reported properties.
    pub payload: StateReportPayload,
}

/// Properties carried by a state report.
#[derive(Debug, Serialize)]
pub struct StateReportPayload {
    /// Current property samples.
    pub properties: Vec<Property>,
}

/// Header of an outbound event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    /// Interface namespace of the event.
    pub namespace: String,
    /// Event name.
    pub name: String,
    /// Always [`PAYLOAD_VERSION`].
    pub payload_version: &'static str,
    /// Fresh unique id per response.
    pub message_id: String,
    /// Echo of the directive's correlation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl ResponseHeader {
    /// Build a header with a fresh message id.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        correlation_token: Option<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            payload_version: PAYLOAD_VERSION,
            message_id: uuid::Uuid::new_v4().to_string(),
            correlation_token,
        }
    }

    /// Build the `<name>Response` header answering the given directive.
    #[must_use]
    pub fn responding_to(header: &DirectiveHeader) -> Self {
        Self::new(
            header.namespace.clone(),
            format!("{}Response", header.name),
            header.correlation_token.clone(),
        )
    }
}

/// Endpoint reference inside an outbound event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEndpoint {
    /// Platform-facing device id.
    pub endpoint_id: String,
}

/// Empty JSON object payload.
#[derive(Debug, Default, Serialize)]
pub struct EmptyPayload {}

/// Context half of a control response.
#[derive(Debug, Serialize)]
pub struct Context {
    /// Properties changed by the directive.
    pub properties: Vec<Property>,
}

/// A single property sample.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Interface namespace of the property.
    pub namespace: &'static str,
    /// Property name.
    pub name: &'static str,
    /// Capability instance, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Wire value.
    pub value: String,
    /// When the value was sampled.
    pub time_of_sample: Timestamp,
    /// Sampling uncertainty in milliseconds.
    pub uncertainty_in_milliseconds: u32,
}

impl Property {
    /// The `powerState` property of a device.
    #[must_use]
    pub fn power_state(device: &Device, uncertainty_in_milliseconds: u32) -> Self {
        Self {
            namespace: NAMESPACE_POWER,
            name: PROPERTY_POWER_STATE,
            instance: None,
            value: device.state.power.to_string(),
            time_of_sample: device.state.last_updated,
            uncertainty_in_milliseconds,
        }
    }

    /// The brew-strength `mode` property of a device.
    #[must_use]
    pub fn brew_strength(device: &Device, uncertainty_in_milliseconds: u32) -> Self {
        Self {
            namespace: NAMESPACE_MODE,
            name: PROPERTY_MODE,
            instance: Some(brew_strength_instance(&device.endpoint_id)),
            value: device.state.brew_strength.to_string(),
            time_of_sample: device.state.last_updated,
            uncertainty_in_milliseconds,
        }
    }

    /// The water-level `rangeValue` property of a device.
    #[must_use]
    pub fn water_level(device: &Device, uncertainty_in_milliseconds: u32) -> Self {
        Self {
            namespace: NAMESPACE_RANGE,
            name: PROPERTY_RANGE_VALUE,
            instance: Some(water_level_instance(&device.endpoint_id)),
            value: device.state.water_level.to_string(),
            time_of_sample: device.state.last_updated,
            uncertainty_in_milliseconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee_maker() -> Device {
        Device::builder()
            .endpoint_id("coffee_maker_123")
            .friendly_name("My Smart Coffee Maker")
            .build()
            .unwrap()
    }

    #[test]
    fn should_describe_power_and_mode_capabilities() {
        let descriptor = EndpointDescriptor::from_device(&coffee_maker());
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["endpointId"], "coffee_maker_123");
        assert_eq!(json["friendlyName"], "My Smart Coffee Maker");
        assert_eq!(json["displayCategories"][0], "COFFEE_MAKER");

        let capabilities = json["capabilities"].as_array().unwrap();
        assert_eq!(capabilities.len(), 2);
        assert_eq!(capabilities[0]["type"], "AlexaInterface");
        assert_eq!(capabilities[0]["interface"], "Alexa.PowerController");
        assert_eq!(capabilities[0]["properties"]["supported"][0]["name"], "powerState");
        assert_eq!(capabilities[1]["interface"], "Alexa.ModeController");
        assert_eq!(capabilities[1]["instance"], "BrewStrength.coffee_maker_123");
    }

    #[test]
    fn should_list_every_brew_strength_in_mode_configuration() {
        let capability =
            Capability::brew_strength_controller(&EndpointId::from("coffee_maker_123"));
        let json = serde_json::to_value(&capability).unwrap();

        let modes = json["configuration"]["supportedModes"].as_array().unwrap();
        let values: Vec<&str> = modes.iter().map(|m| m["value"].as_str().unwrap()).collect();
        assert_eq!(values, vec!["light", "medium", "strong"]);
        assert_eq!(json["configuration"]["ordered"], false);
        assert_eq!(
            modes[0]["modeResources"]["friendlyNames"][0]["value"]["locale"],
            "en-US"
        );
    }

    #[test]
    fn should_echo_correlation_token_in_response_header() {
        let directive = DirectiveHeader {
            namespace: NAMESPACE_POWER.to_string(),
            name: "TurnOn".to_string(),
            instance: None,
            correlation_token: Some("token-1".to_string()),
        };
        let header = ResponseHeader::responding_to(&directive);
        assert_eq!(header.namespace, "Alexa.PowerController");
        assert_eq!(header.name, "TurnOnResponse");
        assert_eq!(header.correlation_token.as_deref(), Some("token-1"));
        assert!(!header.message_id.is_empty());
    }

    #[test]
    fn should_generate_fresh_message_ids() {
        let a = ResponseHeader::new(NAMESPACE_ALEXA, "StateReport", None);
        let b = ResponseHeader::new(NAMESPACE_ALEXA, "StateReport", None);
        assert_ne!(a.message_id, b.message_id);
    }

    #[test]
    fn should_omit_absent_optional_fields_from_wire_json() {
        let header = ResponseHeader::new(NAMESPACE_ALEXA, "StateReport", None);
        let json = serde_json::to_value(&header).unwrap();
        assert!(json.get("correlationToken").is_none());

        let property = Property::power_state(&coffee_maker(), 0);
        let json = serde_json::to_value(&property).unwrap();
        assert!(json.get("instance").is_none());
        assert_eq!(json["value"], "OFF");
        assert_eq!(json["uncertaintyInMilliseconds"], 0);
    }

    #[test]
    fn should_parse_set_mode_directive_envelope() {
        let body = r#"{
            "directive": {
                "header": {
                    "namespace": "Alexa.ModeController",
                    "name": "SetMode",
                    "instance": "BrewStrength.coffee_maker_123",
                    "correlationToken": "abc"
                },
                "endpoint": {"endpointId": "coffee_maker_123"},
                "payload": {"mode": {"value": "strong"}}
            }
        }"#;
        let request: ControlRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.directive.header.name, "SetMode");
        assert_eq!(
            request.directive.header.instance.as_deref(),
            Some("BrewStrength.coffee_maker_123")
        );
        let payload: SetModePayload =
            serde_json::from_value(request.directive.payload).unwrap();
        assert_eq!(payload.mode.value, "strong");
    }

    #[test]
    fn should_parse_directive_without_endpoint_or_payload() {
        let body = r#"{"directive": {"header": {"namespace": "Alexa", "name": "Ping"}}}"#;
        let request: ControlRequest = serde_json::from_str(body).unwrap();
        assert!(request.directive.endpoint.is_none());
        assert!(request.directive.payload.is_null());
    }
}
