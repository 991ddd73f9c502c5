//! Chat-completion client.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::InterpreterConfig;
use crate::context::HexagramContext;
use crate::error::{InterpretError, InterpretResult};
use crate::prompt::{SYSTEM_PROMPT, user_prompt};

/// Returned as content when the service answers without any.
pub const EMPTY_CONTENT: &str = "（无返回内容）";

/// Longest upstream error body kept in an error.
const MAX_ERROR_BODY: usize = 512;

/// A chat message in the OpenAI wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A completed interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    /// The model's answer, or [`EMPTY_CONTENT`].
    pub content: String,
    /// The model that was asked.
    pub model: String,
    /// The upstream response body, verbatim.
    pub raw: serde_json::Value,
}

/// Client for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct Interpreter {
    client: Client,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Build a client with the configured timeout.
    pub fn new(config: InterpreterConfig) -> InterpretResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| InterpretError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The client configuration.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Ask for an interpretation of `ctx` in light of `question`.
    ///
    /// `model` overrides the configured default when given and non-blank.
    pub async fn interpret(
        &self,
        question: &str,
        ctx: &HexagramContext,
        model: Option<&str>,
    ) -> InterpretResult<Interpretation> {
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.config.model.as_str());
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::new("system", SYSTEM_PROMPT),
                ChatMessage::new("user", user_prompt(question, ctx)),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        self.complete(&request).await
    }

    /// Send a raw chat request.
    pub async fn complete(&self, request: &ChatRequest) -> InterpretResult<Interpretation> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InterpretError::MissingApiKey)?;

        tracing::debug!(model = %request.model, endpoint = %self.config.endpoint(), "requesting interpretation");
        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "interpretation service failed");
            return Err(InterpretError::Upstream {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| InterpretError::Decode(e.to_string()))?;
        let content = raw
            .pointer("/choices/0/message/content")
            .and_then(serde_json::Value::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(EMPTY_CONTENT)
            .to_string();

        Ok(Interpretation {
            content,
            model: request.model.clone(),
            raw,
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}
