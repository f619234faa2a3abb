//! Swagger Docs demo host.
//!
//! Serves a few documented routes with the documentation plugin mounted
//! under the configured prefix.

use tokio::net::TcpListener;

mod api;
mod config;
mod logging;

use crate::api::build_router;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init();

    tracing::info!("Starting Swagger Docs demo v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        route_prefix = %config.docs.route_prefix,
        base_dir = %config.docs.base_dir.display(),
        "Configuration loaded"
    );

    let route_prefix = config.docs.route_prefix.clone();

    // Build router; a missing asset bundle aborts startup
    let app = build_router(config.docs).map_err(|e| {
        tracing::error!(error = %e, "Failed to register documentation routes");
        anyhow::anyhow!("Documentation setup error: {}", e)
    })?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}{}", addr, route_prefix);

    axum::serve(listener, app).await?;

    Ok(())
}
