//! Types for the `OpenAI` chat completions API.

use serde::{Deserialize, Serialize};

/// A message in a chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// The role of the message sender ("system" or "user").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// A system-role message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// A user-role message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// `response_format` field forcing schema-conforming JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Structured output constrained by a JSON schema.
    JsonSchema {
        /// The schema envelope.
        json_schema: JsonSchemaFormat,
    },
}

/// Named, strict JSON schema for structured output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    /// Schema name reported back by the API.
    pub name: String,
    /// Reject outputs not matching the schema exactly.
    pub strict: bool,
    /// The JSON schema itself.
    pub schema: serde_json::Value,
}

/// Request body for the chat completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Structured output constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response from the chat completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices (one unless `n` was set).
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// Message content in a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text (JSON when a schema was requested).
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, if any.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
