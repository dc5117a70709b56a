//! Application state for the products service.
//!
//! The product store is owned here rather than living in a global. Handlers
//! reach it through axum's `State` extractor and take the lock for the whole
//! of one store operation, never across an `.await`, so each request sees
//! and leaves a consistent collection.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use products_lib::ProductStore;

use crate::auth::ApiKeyGate;
use crate::config::{RunMode, ServiceConfig, ServiceInfo};
use crate::responder::ErrorResponder;

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; every clone refers to the same store.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use products_service_shared::{AppState, ServiceConfig};
///
/// async fn handler(State(state): State<AppState>) {
///     let count = state.read().await.len();
///     // ...
/// }
///
/// let state = AppState::seeded(&ServiceConfig::from_env());
/// let app = Router::new()
///     .route("/api/products", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RwLock<ProductStore>,
    gate: ApiKeyGate,
    responder: ErrorResponder,
    service: ServiceInfo,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(store: ProductStore, config: &ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
                gate: ApiKeyGate::new(config.api_key.clone()),
                responder: ErrorResponder::new(config.mode),
                service: config.service.clone(),
            }),
        }
    }

    /// Build state around the seeded catalog.
    pub fn seeded(config: &ServiceConfig) -> Self {
        let store = ProductStore::seeded();
        tracing::info!(products = store.len(), "product store seeded");
        Self::new(store, config)
    }

    /// Shared read access to the store.
    pub async fn read(&self) -> RwLockReadGuard<'_, ProductStore> {
        self.inner.store.read().await
    }

    /// Exclusive write access to the store.
    pub async fn write(&self) -> RwLockWriteGuard<'_, ProductStore> {
        self.inner.store.write().await
    }

    pub fn gate(&self) -> &ApiKeyGate {
        &self.inner.gate
    }

    pub fn responder(&self) -> ErrorResponder {
        self.inner.responder
    }

    pub fn mode(&self) -> RunMode {
        self.inner.responder.mode()
    }

    /// Identity reported by the health probes.
    pub fn service(&self) -> &ServiceInfo {
        &self.inner.service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api_key_configured", &self.inner.gate.is_configured())
            .field("mode", &self.mode())
            .field("service", &self.inner.service.name)
            .finish_non_exhaustive()
    }
}
