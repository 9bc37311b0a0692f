//! OpenAI Chat Completions API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::RecipeError;
use crate::types::*;

use super::http::{bearer_headers, build_client, response_to_error};
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

pub struct OpenAiProvider {
    model: String,
    api_key: String,
    base_url: String,
    request_timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<&str>,
    ) -> Result<Self, RecipeError> {
        let request_timeout = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);
        Ok(Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            request_timeout,
            client: build_client(request_timeout)?,
        })
    }

    /// Replace the HTTP client with one using the given timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Result<Self, RecipeError> {
        self.client = build_client(timeout)?;
        self.request_timeout = timeout;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .map(message_to_openai)
            .collect::<Vec<_>>();

        let mut body = serde_json::Map::new();
        body.insert("model".into(), self.model.clone().into());
        body.insert("messages".into(), messages.into());

        let settings = &request.settings;
        if let Some(max) = settings.max_tokens {
            body.insert("max_tokens".into(), max.into());
        }
        if let Some(temp) = settings.temperature {
            body.insert("temperature".into(), temp.into());
        }

        serde_json::Value::Object(body)
    }

    /// A client-side deadline is reported the same way as the handler's own timeout.
    fn transport_error(&self, error: reqwest::Error) -> RecipeError {
        if error.is_timeout() {
            RecipeError::Timeout(self.request_timeout.as_millis() as u64)
        } else {
            RecipeError::Network(error)
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RecipeError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "OpenAI complete");

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key)?)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body_text = resp.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(response_to_error(status.as_u16(), &headers, &body_text));
        }

        let data: OpenAiChatResponse = serde_json::from_str(&body_text)?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RecipeError::MalformedResponse("no choices in response".into()))?;
        let text = choice
            .message
            .content
            .ok_or_else(|| RecipeError::MalformedResponse("choice has no message content".into()))?;

        Ok(CompletionResponse {
            text,
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            finish_reason: choice.finish_reason.as_deref().and_then(parse_finish_reason),
        })
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    match s {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

fn message_to_openai(msg: &ModelMessage) -> serde_json::Value {
    serde_json::json!({ "role": msg.role.as_str(), "content": msg.content })
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
