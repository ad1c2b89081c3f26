//! OpenAI composer - generative prompt composition over the chat API.
//!
//! Rephrases the next question conversationally, optionally acknowledging
//! the respondent's previous answer. Every call is wrapped in a hard
//! `tokio::time::timeout` so a slow backend can never stall a turn; the
//! engine maps a timeout to a recoverable error and leaves the session
//! unchanged.
//!
//! This composer is explicitly non-deterministic; engine tests use the
//! deterministic [`EchoComposer`](super::EchoComposer) instead.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use crate::domain::catalog::Question;
use crate::ports::{ComposerError, ResponseComposer};

const SYSTEM_PROMPT: &str = "You are a friendly survey assistant. Ask the given \
question conversationally, in one or two short sentences. If a previous answer \
is provided, briefly acknowledge it first. Never invent questions of your own.";

/// Configuration for the OpenAI composer.
#[derive(Debug, Clone)]
pub struct OpenAiComposerConfig {
    api_key: Secret<String>,
    /// Model to use (e.g. "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Hard deadline for one composition.
    pub timeout: Duration,
}

impl OpenAiComposerConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Composer backed by the OpenAI chat completions API.
pub struct OpenAiComposer {
    config: OpenAiComposerConfig,
    client: Client,
}

impl OpenAiComposer {
    /// Creates a new composer with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Backend` if the HTTP client cannot be constructed
    pub fn new(config: OpenAiComposerConfig) -> Result<Self, ComposerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ComposerError::backend(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn user_prompt(question: &Question, prior_answer: Option<&str>) -> String {
        let mut prompt = format!("Question: {}", question.text());
        if let Some(guideline) = question.guideline() {
            prompt.push_str(&format!("\nGuideline: {}", guideline));
        }
        if let Some(answer) = prior_answer {
            prompt.push_str(&format!("\nPrevious answer: {}", answer));
        }
        prompt
    }

    async fn request_completion(&self, user_prompt: String) -> Result<String, ComposerError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&request)
            .send()
            .await
            .map_err(|e| ComposerError::backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ComposerError::backend(format!(
                "backend returned status {}",
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ComposerError::backend(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ComposerError::backend("backend returned no completion"))
    }
}

#[async_trait]
impl ResponseComposer for OpenAiComposer {
    async fn compose(
        &self,
        question: &Question,
        prior_answer: Option<&str>,
    ) -> Result<String, ComposerError> {
        let user_prompt = Self::user_prompt(question, prior_answer);
        let deadline = self.config.timeout;

        match timeout(deadline, self.request_completion(user_prompt)).await {
            Ok(result) => result,
            Err(_) => Err(ComposerError::Timeout {
                timeout_secs: deadline.as_secs(),
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
