//! Assistant-platform endpoint handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod control;
#[allow(clippy::missing_errors_doc)]
pub mod discovery;

use axum::Router;
use axum::routing::post;

use brewlink_app::ports::{DeviceActuator, DeviceRegistry};

use crate::state::AppState;

/// Build the `/smart-home` sub-router.
pub fn routes<R, A>() -> Router<AppState<R, A>>
where
    R: DeviceRegistry + Send + Sync + 'static,
    A: DeviceActuator + Send + Sync + 'static,
{
    Router::new()
        .route("/discovery", post(discovery::discover::<R, A>))
        .route("/control", post(control::control::<R, A>))
}
