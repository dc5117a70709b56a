//! Products HTTP microservice.
//!
//! A CRUD API over the in-memory product catalog.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome message
//! - `GET /api/products` - List products (`category`, `page`, `limit`)
//! - `GET /api/products/search?name=` - Case-insensitive name search
//! - `GET /api/products/stats` - Product count per category
//! - `GET /api/products/{id}` - Fetch one product
//! - `POST /api/products` - Create a product (API key)
//! - `PUT /api/products/{id}` - Replace a product (API key)
//! - `DELETE /api/products/{id}` - Delete a product (API key)
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

#![deny(warnings)]

pub mod handlers;

use axum::{
    handler::Handler,
    middleware,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use products_service_shared::{
    handle_panic, health_live, health_ready, metrics_handler, require_api_key, respond_to_errors,
    route_not_found, AppState, MetricsLayer,
};

use crate::handlers::{
    create_product, delete_product, get_product, list_products, product_stats, search_products,
    update_product, welcome,
};

/// Build the full application router around `state`.
///
/// Unknown paths and unsupported methods on known paths both answer with
/// the JSON "Route not found" error.
///
/// Layer order, outermost first: request span and metrics, HTTP trace,
/// error responder, panic catcher, then the per-route API-key gate on the
/// mutating handlers.
pub fn build_router(state: AppState) -> Router {
    let api_key = middleware::from_fn_with_state(state.clone(), require_api_key);

    Router::new()
        .route("/", get(welcome))
        .route(
            "/api/products",
            get(list_products).post(create_product.layer(api_key.clone())),
        )
        .route("/api/products/search", get(search_products))
        .route("/api/products/stats", get(product_stats))
        .route(
            "/api/products/{id}",
            get(get_product)
                .put(update_product.layer(api_key.clone()))
                .delete(delete_product.layer(api_key)),
        )
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            state.responder(),
            respond_to_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}
