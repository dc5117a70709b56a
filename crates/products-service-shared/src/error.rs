//! HTTP error taxonomy for the products API.
//!
//! Every failure a handler or middleware can produce is an [`ApiError`].
//! Turning one into a response renders `{"message": ...}` with the matching
//! status and attaches an [`ErrorReport`] extension; the
//! [`respond_to_errors`](crate::responder::respond_to_errors) middleware picks
//! the report up and produces the final body for the configured run mode.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use products_lib::Error as LibError;

/// Message returned by the auth gate.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid or missing API key";

/// Message returned for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Message returned for paths no route matches.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Any failure surfaced over HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain failure from the product store or validation gate.
    #[error(transparent)]
    Product(#[from] LibError),

    /// Missing or mismatched API key.
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    /// Body or query string could not be extracted.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// No route matches the request path.
    #[error("{}", ROUTE_NOT_FOUND_MESSAGE)]
    RouteNotFound,

    /// Anything else. `detail` is only exposed through the trace.
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal { detail: String },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Product(err) => {
                StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Rejected { status, .. } => *status,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic rendering: the error's debug form followed by its sources.
    pub fn trace(&self) -> String {
        let mut trace = format!("{:?}", self);
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            trace.push_str("\n    caused by: ");
            trace.push_str(&err.to_string());
            source = err.source();
        }
        trace
    }

    /// Snapshot of everything the error responder needs.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            status: self.status(),
            message: self.to_string(),
            trace: self.trace(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Response-extension record of a failure, consumed by the error responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    pub trace: String,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    /// Diagnostic trace, present only in development mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let report = self.report();
        let body = ErrorBody {
            message: report.message.clone(),
            error: None,
        };

        let mut response = (report.status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(LibError::product_not_found()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(LibError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::from(LibError::product_not_found()).to_string(),
            "Product not found"
        );
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Unauthorized: Invalid or missing API key"
        );
        assert_eq!(
            ApiError::internal("db exploded").to_string(),
            "Something went wrong!"
        );
    }

    #[test]
    fn test_internal_detail_only_in_trace() {
        let err = ApiError::internal("db exploded");
        assert!(!err.to_string().contains("db exploded"));
        assert!(err.trace().contains("db exploded"));
    }

    #[test]
    fn test_into_response_attaches_report() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.message, UNAUTHORIZED_MESSAGE);
        assert_eq!(report.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_body_omits_missing_trace() {
        let body = ErrorBody {
            message: "Product not found".to_string(),
            error: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Product not found"}"#);
    }
}
