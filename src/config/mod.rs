//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEYFLOW` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use surveyflow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod composer;
mod error;
mod server;
mod sessions;

pub use composer::{ComposerBackend, ComposerConfig};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use sessions::SessionsConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Response composer configuration (echo or OpenAI backend)
    #[serde(default)]
    pub composer: ComposerConfig,

    /// Session retention configuration (TTL, sweep interval)
    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SURVEYFLOW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEYFLOW__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SURVEYFLOW__COMPOSER__BACKEND=openai` -> `composer.backend = openai`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEYFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.composer.validate()?;
        self.sessions.validate()?;
        Ok(())
    }

    /// Check if running in production environment.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SURVEYFLOW__SERVER__PORT");
        env::remove_var("SURVEYFLOW__SERVER__ENVIRONMENT");
        env::remove_var("SURVEYFLOW__COMPOSER__BACKEND");
        env::remove_var("SURVEYFLOW__SESSIONS__TTL_SECS");
    }

    #[test]
    fn loads_with_all_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.composer.backend, ComposerBackend::Echo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEYFLOW__SERVER__PORT", "3000");
        env::set_var("SURVEYFLOW__SESSIONS__TTL_SECS", "120");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sessions.ttl_secs, 120);
    }

    #[test]
    fn is_production_follows_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEYFLOW__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
