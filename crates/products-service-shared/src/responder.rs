//! Single translation point from failures to HTTP error responses.
//!
//! Handlers, the auth gate, extractor rejections, the fallback route and the
//! panic catcher all produce responses carrying an [`ErrorReport`]. The
//! [`respond_to_errors`] middleware, installed outermost, logs each report
//! and renders the final `{message, error?}` body, where `error` holds the
//! trace and is only present in development mode.

use std::any::Any;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::config::RunMode;
use crate::error::{ApiError, ErrorBody, ErrorReport};

/// Renders error reports according to the run mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder {
    mode: RunMode,
}

impl ErrorResponder {
    pub fn new(mode: RunMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Body for a report; the trace is included only in development mode.
    pub fn body(&self, report: &ErrorReport) -> ErrorBody {
        ErrorBody {
            message: report.message.clone(),
            error: self
                .mode
                .is_development()
                .then(|| report.trace.clone()),
        }
    }

    /// Full response for a report.
    pub fn render(&self, report: &ErrorReport) -> Response {
        (report.status, Json(self.body(report))).into_response()
    }
}

/// Middleware that rewrites every error response through the [`ErrorResponder`].
pub async fn respond_to_errors(
    State(responder): State<ErrorResponder>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    if report.status.is_server_error() {
        error!(status = report.status.as_u16(), trace = %report.trace, "request failed");
    } else {
        warn!(status = report.status.as_u16(), message = %report.message, "request rejected");
    }

    let mut rendered = responder.render(&report);
    // Keep headers set further in on the rewritten response.
    for (name, value) in response.headers() {
        if name != axum::http::header::CONTENT_TYPE && name != axum::http::header::CONTENT_LENGTH {
            rendered.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rendered
}

/// Fallback handler for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Convert a handler panic into an internal error response.
///
/// Intended for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(format!("panic: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use products_lib::Error as LibError;

    fn not_found_report() -> ErrorReport {
        ApiError::from(LibError::product_not_found()).report()
    }

    #[test]
    fn test_production_body_has_no_trace() {
        let responder = ErrorResponder::new(RunMode::Production);
        let body = responder.body(&not_found_report());
        assert_eq!(body.message, "Product not found");
        assert!(body.error.is_none());
    }

    #[test]
    fn test_development_body_has_trace() {
        let responder = ErrorResponder::new(RunMode::Development);
        let body = responder.body(&not_found_report());
        let trace = body.error.expect("trace present in development");
        assert!(trace.contains("NotFound"));
    }

    #[test]
    fn test_render_keeps_status() {
        let responder = ErrorResponder::default();
        let response = responder.render(&not_found_report());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_handle_panic_with_str_payload() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.message, "Something went wrong!");
        assert!(report.trace.contains("panic: boom"));
    }

    #[test]
    fn test_handle_panic_with_string_payload() {
        let response = handle_panic(Box::new(String::from("formatted boom")));
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert!(report.trace.contains("formatted boom"));
    }
}
