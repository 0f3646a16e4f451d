//! athena-api service entry point.

use anyhow::Result;
use athena_api::{build_router, AppState};
use athena_common::config::Config;
use athena_common::error::Error;
use athena_common::logging::init_logging;
use athena_common::validation::Validate;

#[tokio::main]
async fn main() -> Result<()> {
    let startup_start = std::time::Instant::now();

    let config = Config::load_with_env()?;
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );
    config.validate().map_err(Error::from)?;

    tracing::info!("Athena API v{}", env!("CARGO_PKG_VERSION"));

    let app = build_router(AppState::from_config(&config.api));
    let addr = config.api_addr();

    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Athena Study AI server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
