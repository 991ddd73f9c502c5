//! Configuration for the interpretation client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 3] = [
    "SILICONFLOW_API_KEY",
    "SILICONFLOW_TOKEN",
    "SILICONFLOW_KEY",
];

/// Default OpenAI-compatible endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "Qwen/QwQ-32B";

/// Settings for talking to the chat-completion service.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Bearer token. Never serialized.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model used when a request names none.
    pub model: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length cap, if any.
    pub max_tokens: Option<u32>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: 60_000,
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl std::fmt::Debug for InterpreterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpreterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl InterpreterConfig {
    /// Defaults with the API key taken from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_key_from(|name| std::env::var(name).ok())
    }

    /// Fill in the API key from the first of [`API_KEY_VARS`] that `lookup`
    /// returns a non-blank value for. An existing key is kept.
    pub fn with_key_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.api_key.is_none() {
            self.api_key = API_KEY_VARS
                .iter()
                .filter_map(|name| lookup(name))
                .find(|v| !v.trim().is_empty());
        }
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full chat-completions URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Whether an API key is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
