//! Control handler — applies directives to a device and reports state.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use brewlink_app::ports::{DeviceActuator, DeviceRegistry};
use brewlink_domain::device::Device;
use brewlink_domain::error::ValidationError;
use brewlink_domain::id::EndpointId;
use brewlink_domain::state::{BrewStrength, PowerState};

use crate::error::ApiError;
use crate::protocol::{
    ControlEvent, ControlRequest, ControlResponse, Context, Directive, DirectiveHeader,
    EmptyPayload, NAMESPACE_ALEXA, NAMESPACE_MODE, NAMESPACE_POWER, NAMESPACE_STATE_REPORT,
    Property, ResponseEndpoint, ResponseHeader, SetModePayload, StateReportEvent,
    StateReportPayload, StateReportResponse, brew_strength_instance,
};
use crate::state::AppState;

/// Possible success responses from the control endpoint.
pub enum ControlResult {
    /// `<name>Response` event with the changed property in context.
    Event(Json<ControlResponse>),
    /// `StateReport` event listing every retrievable property.
    StateReport(Json<StateReportResponse>),
}

impl IntoResponse for ControlResult {
    fn into_response(self) -> Response {
        match self {
            Self::Event(json) => json.into_response(),
            Self::StateReport(json) => json.into_response(),
        }
    }
}

/// `POST /smart-home/control`
pub async fn control<R, A>(
    State(state): State<AppState<R, A>>,
    Json(request): Json<ControlRequest>,
) -> Result<ControlResult, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    A: DeviceActuator + Send + Sync + 'static,
{
    let Directive {
        header,
        endpoint,
        payload,
    } = request.directive;

    let endpoint_id = endpoint
        .map(|e| EndpointId::from(e.endpoint_id))
        .ok_or(ValidationError::MissingField {
            field: "directive.endpoint.endpointId",
        })?;

    tracing::debug!(
        namespace = %header.namespace,
        name = %header.name,
        endpoint = %endpoint_id,
        "control directive received"
    );

    // Unknown devices are a 404 before the directive is interpreted.
    let current = state.device_service.report_state(&endpoint_id).await?;

    match (header.namespace.as_str(), header.name.as_str()) {
        (NAMESPACE_POWER, "TurnOn") => {
            let device = state
                .device_service
                .set_power(&endpoint_id, PowerState::On)
                .await?;
            let property = Property::power_state(&device, 0);
            Ok(ControlResult::Event(Json(control_response(
                &header, &device, property,
            ))))
        }
        (NAMESPACE_POWER, "TurnOff") => {
            let device = state
                .device_service
                .set_power(&endpoint_id, PowerState::Off)
                .await?;
            let property = Property::power_state(&device, 0);
            Ok(ControlResult::Event(Json(control_response(
                &header, &device, property,
            ))))
        }
        (NAMESPACE_MODE, "SetMode") => {
            let expected = brew_strength_instance(&endpoint_id);
            match header.instance.as_deref() {
                Some(instance) if instance == expected => {}
                Some(instance) => {
                    return Err(ValidationError::UnsupportedInstance {
                        instance: instance.to_string(),
                    }
                    .into());
                }
                None => {
                    return Err(ValidationError::MissingField {
                        field: "directive.header.instance",
                    }
                    .into());
                }
            }

            let payload: SetModePayload =
                serde_json::from_value(payload).map_err(|_| ValidationError::MissingField {
                    field: "directive.payload.mode.value",
                })?;
            let strength: BrewStrength = payload.mode.value.parse()?;

            let device = state
                .device_service
                .set_brew_strength(&endpoint_id, strength)
                .await?;
            let property = Property::brew_strength(&device, 0);
            Ok(ControlResult::Event(Json(control_response(
                &header, &device, property,
            ))))
        }
        (NAMESPACE_STATE_REPORT, "ReportState") => {
            Ok(ControlResult::StateReport(Json(state_report(
                &header, &current,
            ))))
        }
        (namespace, name) => Err(ValidationError::UnsupportedDirective {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
        .into()),
    }
}

/// Shape a `<name>Response` event carrying the property the directive changed.
fn control_response(
    header: &DirectiveHeader,
    device: &Device,
    property: Property,
) -> ControlResponse {
    ControlResponse {
        event: ControlEvent {
            header: ResponseHeader::responding_to(header),
            endpoint: ResponseEndpoint {
                endpoint_id: device.endpoint_id.to_string(),
            },
            payload: EmptyPayload::default(),
        },
        context: Context {
            properties: vec![property],
        },
    }
}

/// Shape a `StateReport` event listing every retrievable property.
fn state_report(header: &DirectiveHeader, device: &Device) -> StateReportResponse {
    StateReportResponse {
        event: StateReportEvent {
            header: ResponseHeader::new(
                NAMESPACE_ALEXA,
                "StateReport",
                header.correlation_token.clone(),
            ),
            endpoint: ResponseEndpoint {
                endpoint_id: device.endpoint_id.to_string(),
            },
            payload: StateReportPayload {
                properties: vec![
                    Property::power_state(device, 50),
                    Property::brew_strength(device, 50),
                    Property::water_level(device, 50),
                ],
            },
        },
    }
}
