//! Static API-key gate for mutating routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::metrics::record_auth_rejected;
use crate::AppState;

/// Header carrying the client's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Compares the `x-api-key` header against a secret fixed at construction.
///
/// A gate built without a secret rejects every request.
#[derive(Clone, Default)]
pub struct ApiKeyGate {
    secret: Option<Arc<str>>,
}

impl ApiKeyGate {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()).map(Arc::from),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Pass if the header is present and equal to the secret.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the header is missing, empty,
    /// not valid ASCII, or different from the secret.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let Some(secret) = self.secret.as_deref() else {
            return Err(ApiError::Unauthorized);
        };

        let presented = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        if bool::from(presented.as_bytes().ct_eq(secret.as_bytes())) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

/// Middleware enforcing the [`ApiKeyGate`] held in [`AppState`].
///
/// Install per handler with `Handler::layer` so only the guarded methods are affected.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = state.gate().check(request.headers()) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "rejected request without valid api key"
        );
        record_auth_rejected();
        return Err(err);
    }

    Ok(next.run(request).await)
}
