//! # growlightd — grow-light daemon
//!
//! Composition root that wires a host adapter to the light controller and
//! runs it on a fixed interval.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Validate the grow-light settings (fatal on error)
//! - Construct the selected host adapter (Home Assistant or virtual)
//! - Construct the controller and scheduler, injecting adapters via port traits
//! - Run until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use growlight_adapter_homeassistant::HomeAssistantClient;
use growlight_adapter_virtual::VirtualIntegration;
use growlight_app::controller::LightController;
use growlight_app::ports::{SensorReader, SwitchActuator, SystemClock};
use growlight_app::scheduler::Scheduler;
use growlight_domain::settings::Settings;
use growlight_domain::state::UvReading;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, HostKind};

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("growlightd: {}", report(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let settings = config.lights.settings()?;
    let interval = config.lights.check_interval();

    tracing::info!(
        sensor = %settings.uv_index_sensor,
        threshold = settings.uv_index_threshold,
        switches = settings.switches.len(),
        host = ?config.host.kind,
        "grow lights controller initialized"
    );

    match config.host.kind {
        HostKind::HomeAssistant => {
            let client = HomeAssistantClient::new(&config.host.home_assistant)?;
            tracing::info!(url = client.base_url(), "using Home Assistant host");
            run(settings, client.clone(), client, interval).await;
        }
        HostKind::Virtual => {
            let reading = config
                .host
                .virtual_host
                .uv_index
                .map_or(UvReading::Unavailable, UvReading::Value);
            let host = Arc::new(VirtualIntegration::new(&settings, reading));
            tracing::info!(?reading, "using virtual host");
            run(settings, Arc::clone(&host), host, interval).await;
        }
    }

    Ok(())
}

async fn run<S, A>(settings: Settings, sensor: S, actuator: A, interval: Duration)
where
    S: SensorReader,
    A: SwitchActuator,
{
    let controller = LightController::new(settings, SystemClock, sensor, actuator);
    Scheduler::new(controller, interval)
        .run(shutdown_signal())
        .await;
    tracing::info!("growlightd stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Render an error and its sources on one line.
fn report(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
