//! Test utilities for handler and router testing.
//!
//! Provides seeded state with a known API key so tests across crates build
//! the same fixture.

use crate::config::{RunMode, ServiceConfig};
use crate::state::AppState;

/// API key accepted by [`test_state`].
pub const TEST_API_KEY: &str = "test-api-key";

/// Configuration with [`TEST_API_KEY`] in production mode.
pub fn test_config() -> ServiceConfig {
    ServiceConfig::default().with_api_key(TEST_API_KEY)
}

/// Fresh seeded state accepting [`TEST_API_KEY`], in production mode.
///
/// Every call returns an independent store.
pub fn test_state() -> AppState {
    AppState::seeded(&test_config())
}

/// Fresh seeded state accepting [`TEST_API_KEY`] in the given mode.
pub fn test_state_with_mode(mode: RunMode) -> AppState {
    AppState::seeded(&test_config().with_mode(mode))
}

/// Known seed records for use in assertions.
pub mod fixture_products {
    /// "Laptop", electronics.
    pub const LAPTOP_ID: &str = "1";

    /// "Smartphone", electronics.
    pub const SMARTPHONE_ID: &str = "2";

    /// "Coffee Maker", kitchen.
    pub const COFFEE_MAKER_ID: &str = "3";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_states_are_independent() {
        let a = test_state();
        let b = test_state();
        a.write().await.delete(fixture_products::LAPTOP_ID).unwrap();

        assert_eq!(a.read().await.len(), 2);
        assert_eq!(b.read().await.len(), 3);
    }

    #[test]
    fn test_state_accepts_test_key() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert(
            crate::auth::API_KEY_HEADER,
            axum::http::HeaderValue::from_static(TEST_API_KEY),
        );
        assert!(test_state().gate().check(&headers).is_ok());
    }
}
