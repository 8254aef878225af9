//! HTTP client for OpenAI-compatible chat-completion endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

use super::prompt::{ChatMessage, ChatRequest};

/// Maximum characters of an error response body kept in [`ApiError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Trait for sending a chat request and returning the reply text.
///
/// This abstraction allows mocking the remote API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` and return the first choice's content, trimmed.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ApiError>;
}

/// Response body from a chat-completion endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the first choice's trimmed content from a response body.
pub fn parse_response(body: &str) -> Result<String, ApiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidJson(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::EmptyResponse)
}

/// Client that POSTs to the configured endpoint with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: reqwest::Client,
    config: Config,
}

impl HttpCompletionClient {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
        let request = ChatRequest::new(self.config.model.clone(), messages.to_vec());

        debug!(
            "POST {} (model {}, {} messages)",
            self.config.endpoint,
            self.config.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Request)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_response(&body)
    }
}
