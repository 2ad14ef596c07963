//! Infra Health API: liveness and database readiness endpoints for a
//! load-balanced web tier.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod health;
pub mod server;
pub mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        e
    })?;

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        public_dir = %config.public_dir.display(),
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.database,
        "configuration loaded"
    );

    console::print_banner();

    let addr = config.bind_addr();
    let state = state::build_state(config);
    server::run(state, &addr).await?;
    Ok(())
}
