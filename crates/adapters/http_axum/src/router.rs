//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use brewlink_app::ports::{DeviceActuator, DeviceRegistry};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the assistant-platform endpoints under `/smart-home` and a
/// trivial liveness probe at `/health`. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<R, A>(state: AppState<R, A>) -> Router
where
    R: DeviceRegistry + Send + Sync + 'static,
    A: DeviceActuator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/smart-home", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use brewlink_adapter_virtual::VirtualCoffeeMaker;
    use brewlink_app::registry::InMemoryDeviceRegistry;
    use brewlink_app::services::device_service::DeviceService;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let coffee_maker = VirtualCoffeeMaker::default();
        let registry = InMemoryDeviceRegistry::with_device(coffee_maker.descriptor().unwrap());
        build(AppState::new(DeviceService::new(registry, coffee_maker)))
    }

    fn control_body(namespace: &str, name: &str) -> String {
        format!(
            r#"{{"directive":{{"header":{{"namespace":"{namespace}","name":"{name}"}},"endpoint":{{"endpointId":"coffee_maker_123"}},"payload":{{}}}}}}"#
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_discovery_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smart-home/discovery")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_accept_supported_control_directive() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smart-home/control")
                    .header("content-type", "application/json")
                    .body(Body::from(control_body("Alexa.PowerController", "TurnOn")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_unsupported_control_directive() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smart-home/control")
                    .header("content-type", "application/json")
                    .body(Body::from(control_body("Alexa.Unsupported", "DoThing")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_malformed_control_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smart-home/control")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
