//! # brewlinkd — brewlink daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise the `tracing` subscriber
//! - Construct the virtual coffee maker and seed the in-memory registry
//! - Construct the application service, injecting ports
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use brewlink_adapter_http_axum::state::AppState;
use brewlink_adapter_virtual::VirtualCoffeeMaker;
use brewlink_app::registry::InMemoryDeviceRegistry;
use brewlink_app::services::device_service::DeviceService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Device & registry
    let coffee_maker = VirtualCoffeeMaker::new(
        config.device.endpoint_id.as_str(),
        config.device.friendly_name.as_str(),
    );
    let registry = InMemoryDeviceRegistry::with_device(coffee_maker.descriptor()?);

    // Services
    let device_service = DeviceService::new(registry, coffee_maker);

    // HTTP
    let state = AppState::new(device_service);
    let app = brewlink_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "brewlinkd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
