//! Service configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `SERVICE_PORT`: HTTP port (default: 3000)
//! - `API_KEY`: secret required in the `x-api-key` header of mutating
//!   requests. When unset every mutating request is rejected.
//! - `APP_ENV`: `development` echoes error traces in responses; anything
//!   else (default `production`) omits them.

use serde::{Deserialize, Serialize};

/// Port used when `SERVICE_PORT` is absent or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Deployment mode controlling how much error detail is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Error responses include a diagnostic trace.
    Development,
    /// Error responses carry only the message.
    #[default]
    Production,
}

impl RunMode {
    /// Parse a mode name; only `development` (any case) selects development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            RunMode::Development
        } else {
            RunMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == RunMode::Development
    }
}

/// Name and version a service reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new("products-service", env!("CARGO_PKG_VERSION"))
    }
}

/// Top-level configuration for the products service.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub mode: RunMode,
    /// Identity reported by the health probes.
    pub service: ServiceInfo,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            mode: RunMode::Production,
            service: ServiceInfo::default(),
        }
    }
}

impl ServiceConfig {
    /// Create configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("SERVICE_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("API_KEY").filter(|k| !k.is_empty());

        let mode = lookup("APP_ENV")
            .map(|v| RunMode::parse(&v))
            .unwrap_or_default();

        Self {
            port,
            api_key,
            mode,
            service: ServiceInfo::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the name and version reported by the health probes.
    pub fn with_service(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.service = ServiceInfo::new(name, version);
        self
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("mode", &self.mode)
            .field("service", &self.service)
            .finish()
    }
}
