//! Response composer configuration.

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// Which composer adapter serves prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComposerBackend {
    /// Deterministic echo composer. No network, suitable for development
    /// and tests.
    #[default]
    Echo,
    /// OpenAI chat-completions backed composer.
    OpenAi,
}

/// Composer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    #[serde(default)]
    pub backend: ComposerBackend,

    /// OpenAI API key. Required when `backend = openai`.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    /// Model identifier (default: "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (default: "https://api.openai.com/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Composer call timeout in seconds (default: 15)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            backend: ComposerBackend::default(),
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ComposerConfig {
    /// # Errors
    ///
    /// Returns `ValidationError` if the OpenAI backend is selected without
    /// an API key, or the timeout is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == ComposerBackend::OpenAi && self.api_key.is_none() {
            return Err(ValidationError::MissingApiKey);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidComposerTimeout);
        }
        Ok(())
    }
}
