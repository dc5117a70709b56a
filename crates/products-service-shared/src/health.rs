//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// RFC 3339 time the status was produced.
    pub timestamp: String,

    /// Number of products currently stored (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            timestamp: now_rfc3339(),
            products_loaded: None,
        }
    }

    /// Create a ready status with the current product count.
    pub fn ready(service: &str, version: &str, products: usize) -> Self {
        Self {
            products_loaded: Some(products),
            ..Self::alive(service, version)
        }
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"products-service","version":"0.1.0","timestamp":"..."}
/// ```
pub async fn health_live(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service();
    let status = HealthStatus::alive(&service.name, &service.version);
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The store lives in memory and needs no warm-up, so the service is ready
/// as soon as it can take the read lock. An empty catalog is still ready.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.read().await.len();
    let service = state.service();
    let status = HealthStatus::ready(&service.name, &service.version, products);
    (StatusCode::OK, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceConfig;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("products", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "products");
        assert!(status.products_loaded.is_none());
        assert!(status.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("products", "1.0.0", 3);
        assert_eq!(status.status, "ok");
        assert_eq!(status.products_loaded, Some(3));
    }

    #[tokio::test]
    async fn test_health_live_reports_configured_service() {
        let config = ServiceConfig::default().with_service("catalog", "9.9.9");
        let state = AppState::seeded(&config);

        let response = health_live(State(state)).await.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: HealthStatus = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status.service, "catalog");
        assert_eq!(status.version, "9.9.9");
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("products", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("products_loaded"));
    }
}
