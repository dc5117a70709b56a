//! Shared HTTP infrastructure for the products service.
//!
//! This crate provides the pieces every handler relies on:
//!
//! - [`AppState`]: The owned product store plus the auth gate and error responder
//! - [`ApiError`]: The HTTP error taxonomy handlers return
//! - [`responder`]: The single error-to-response translation point
//! - [`auth`]: Static API-key gate for mutating routes
//! - [`health`]: Liveness/readiness handlers
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON/text logging setup
//! - [`middleware`]: Request spans and HTTP metrics
//! - Request types with validation for each endpoint
//!
//! # Architecture
//!
//! Handlers stay thin; catalog behavior lives in `products-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  MetricsLayer (span, metrics)                               │
//! │  └─ TraceLayer                                              │
//! │     └─ respond_to_errors (ErrorReport -> {message, error?}) │
//! │        └─ CatchPanicLayer                                   │
//! │           └─ require_api_key (POST/PUT/DELETE only)         │
//! │              └─ Handler -> Validate -> ProductStore         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides seeded state with a known API key.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

pub mod auth;
pub mod config;
mod error;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod request;
pub mod responder;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use auth::{require_api_key, ApiKeyGate, API_KEY_HEADER};
pub use config::{RunMode, ServiceConfig, ServiceInfo, DEFAULT_PORT};
pub use error::{
    ApiError, ErrorBody, ErrorReport, INTERNAL_ERROR_MESSAGE, ROUTE_NOT_FOUND_MESSAGE,
    UNAUTHORIZED_MESSAGE,
};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingError};
pub use metrics::{
    init_metrics, metrics_handler, record_auth_rejected, record_product_mutation, record_search,
    MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use request::{ListQuery, ProductPayload, SearchQuery, Validate};
pub use responder::{handle_panic, respond_to_errors, route_not_found, ErrorResponder};
pub use state::AppState;
