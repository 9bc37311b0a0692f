//! Completion provider trait and implementations.

pub mod http;

#[cfg(feature = "openai")]
pub mod openai;

use async_trait::async_trait;

use crate::config::RecipeConfig;
use crate::error::RecipeError;
use crate::types::{FinishReason, GenerationSettings, ModelMessage, Usage};

/// A request sent to a completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ModelMessage>, settings: GenerationSettings) -> Self {
        Self { messages, settings }
    }

    /// Text of the last user message, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::types::Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Response from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

impl CompletionResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: Usage::default(),
            finish_reason: Some(FinishReason::Stop),
        }
    }
}

/// Core trait implemented by completion providers.
///
/// Implementations make exactly one outbound call per `complete` and never
/// retry; failures are returned to the caller as-is.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Turn a prompt into generated text.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, RecipeError>;
}

/// Create the configured provider.
#[cfg(feature = "openai")]
pub fn create_provider(config: &RecipeConfig) -> Result<Box<dyn CompletionProvider>, RecipeError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| RecipeError::Authentication("Missing OPENAI_API_KEY".into()))?;
    let provider = openai::OpenAiProvider::new(config.model(), api_key, Some(config.base_url()))?
        .with_request_timeout(config.request_timeout())?;
    Ok(Box::new(provider))
}

/// Create the configured provider.
#[cfg(not(feature = "openai"))]
pub fn create_provider(_config: &RecipeConfig) -> Result<Box<dyn CompletionProvider>, RecipeError> {
    Err(RecipeError::Configuration(
        "No completion provider enabled via feature flags".into(),
    ))
}
