//! Prometheus metrics for the products service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Install the Prometheus recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for catalog operations
//!
//! Recording through the helpers is always safe: without an installed
//! recorder the `metrics` macros are no-ops.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "false" disables collection (default: enabled)
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("METRICS_ENABLED").ok().as_deref())
    }

    fn from_value(enabled: Option<&str>) -> Self {
        Self {
            enabled: enabled.map_or(true, |v| !v.trim().eq_ignore_ascii_case("false")),
        }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,

    #[error("metrics recorder already initialized")]
    AlreadyInitialized,

    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Install the Prometheus recorder.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder was already
/// installed, or the Prometheus builder fails.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Axum handler for the `/metrics` endpoint (Prometheus exposition format).
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Count a successful create, update or delete.
pub fn record_product_mutation(operation: &'static str) {
    metrics::counter!("products_mutations_total", "operation" => operation).increment(1);
}

/// Count a name search and record how many products it matched.
pub fn record_search(results: usize) {
    metrics::counter!("products_searches_total").increment(1);
    metrics::histogram!("products_search_results").record(results as f64);
}

/// Count a request turned away by the API-key gate.
pub fn record_auth_rejected() {
    metrics::counter!("products_auth_rejected_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_config_default() {
        assert!(MetricsConfig::default().enabled);
    }

    #[test]
    fn test_metrics_config_values() {
        assert!(MetricsConfig::from_value(None).enabled);
        assert!(MetricsConfig::from_value(Some("true")).enabled);
        assert!(!MetricsConfig::from_value(Some("FALSE")).enabled);
    }

    #[test]
    fn test_init_metrics_disabled() {
        let result = init_metrics(&MetricsConfig { enabled: false });
        assert!(matches!(result, Err(MetricsError::Disabled)));
    }

    #[tokio::test]
    async fn test_metrics_handler_returns_prometheus_text() {
        let output = metrics_handler().await;
        assert!(output.contains('#') || output.is_empty() || output.contains("products"));
    }

    #[test]
    fn test_business_helpers_without_recorder() {
        record_product_mutation("create");
        record_product_mutation("delete");
        record_search(2);
        record_auth_rejected();
    }

    #[test]
    fn test_metrics_error_display() {
        assert_eq!(MetricsError::Disabled.to_string(), "metrics are disabled");
        assert!(MetricsError::InstallFailed("boom".to_string())
            .to_string()
            .contains("boom"));
    }
}
