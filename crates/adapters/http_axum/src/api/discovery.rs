//! Discovery handler — describes the integration's devices to the platform.

use axum::Json;
use axum::extract::State;

use brewlink_app::ports::{DeviceActuator, DeviceRegistry};

use crate::error::ApiError;
use crate::protocol::{
    DiscoveryEvent, DiscoveryHeader, DiscoveryPayload, DiscoveryResponse, EndpointDescriptor,
};
use crate::state::AppState;

/// `POST /smart-home/discovery`
///
/// The platform's discovery envelope carries nothing this demo needs, so the
/// request body is ignored. Read-only; the same descriptors come back no
/// matter what control traffic preceded the call.
pub async fn discover<R, A>(
    State(state): State<AppState<R, A>>,
) -> Result<Json<DiscoveryResponse>, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    A: DeviceActuator + Send + Sync + 'static,
{
    let devices = state.device_service.discover_devices().await?;
    tracing::debug!(count = devices.len(), "discovery request received");

    let endpoints = devices.iter().map(EndpointDescriptor::from_device).collect();
    Ok(Json(DiscoveryResponse {
        event: DiscoveryEvent {
            header: DiscoveryHeader::default(),
            payload: DiscoveryPayload { endpoints },
        },
    }))
}
