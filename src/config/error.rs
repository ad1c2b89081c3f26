//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("composer timeout must be between 1 and 120 seconds")]
    InvalidComposerTimeout,

    #[error("openai composer backend requires an api key")]
    MissingApiKey,

    #[error("session sweep interval must be non-zero")]
    InvalidSweepInterval,
}
