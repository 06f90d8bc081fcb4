//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise JSON logging for a Rango binary. Defaults to `info` for the
/// whole workspace; `RUST_LOG` overrides the filter.
pub fn init_telemetry(app_name: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();

    tracing::info!(app = app_name, "Telemetry initialised");
}
