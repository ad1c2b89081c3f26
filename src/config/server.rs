//! HTTP server configuration.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment (default: development)
    #[serde(default)]
    pub environment: Environment,

    /// Tracing filter directive (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Allowed CORS origins. Empty means allow any origin, which is only
    /// acceptable outside production.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address the server binds to.
    ///
    /// Falls back to `0.0.0.0` if the configured host does not parse.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// # Errors
    ///
    /// Returns `ValidationError` if the port is zero or the request timeout
    /// is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
