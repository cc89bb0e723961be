//! `OpenAI` chat completions client.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::OpenAiConfig;

use super::error::OpenAiError;
use super::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat completions client.
///
/// Clone-cheap handle over a shared reqwest client with pre-set auth
/// headers.
#[derive(Clone)]
pub struct ReasoningClient {
    inner: Arc<ReasoningClientInner>,
}

struct ReasoningClientInner {
    client: reqwest::Client,
    model: String,
}

impl ReasoningClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `config` - `OpenAI` configuration containing API key and model
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &OpenAiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ReasoningClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Model this client is configured for.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Send a chat completion request and return the first choice's content.
    ///
    /// # Arguments
    ///
    /// * `messages` - System and user messages
    /// * `response_format` - Optional structured-output constraint
    /// * `temperature` - Sampling temperature
    /// * `max_tokens` - Output token cap
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns a non-success
    /// status, or the response carries no content.
    #[instrument(skip(self, messages, response_format), fields(model = %self.inner.model))]
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        response_format: Option<ResponseFormat>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            messages,
            response_format,
            temperature: Some(temperature),
            max_tokens: Some(max_tokens),
        };

        let response = self
            .inner
            .client
            .post(OPENAI_CHAT_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Parse(e.to_string()))?;

        response
            .first_content()
            .map(ToString::to_string)
            .ok_or(OpenAiError::EmptyResponse)
    }
}
