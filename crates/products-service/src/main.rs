//! Products HTTP microservice binary.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 3000)
//! - `API_KEY` - Secret for the `x-api-key` header on mutating routes
//! - `APP_ENV` - `development` echoes error traces in responses
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - Set to `false` to skip the Prometheus recorder

use std::net::SocketAddr;

use tracing::{info, warn};

use products_service::build_router;
use products_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(env!("CARGO_PKG_NAME"));
    init_logging(&logging_config)?;

    if let Err(e) = init_metrics(&MetricsConfig::from_env()) {
        // Metrics are optional
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env()
        .with_service(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if config.api_key.is_none() {
        warn!("API_KEY is not set; every create, update and delete will be rejected");
    }
    info!(port = config.port, mode = ?config.mode, "starting products service");

    let state = AppState::seeded(&config);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening on");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
