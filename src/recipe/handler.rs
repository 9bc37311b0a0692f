//! The recipe tool handler: request in, one provider call, result out.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::{RecipeConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::RecipeError;
use crate::provider::{create_provider, CompletionProvider, CompletionRequest, CompletionResponse};
use crate::types::{GenerationSettings, ModelMessage};
use crate::util::timeout::with_timeout;

use super::prompt::{build_recipe_prompt, build_substitution_prompt, CHEF_SYSTEM_PROMPT};
use super::request::{RecipeRequest, RecipeResult};
use super::substitution::{parse_substitutions, SubstitutionRequest, SubstitutionResult};

const RECIPE_TEMPERATURE: f64 = 0.7;
const RECIPE_MAX_TOKENS: u32 = 1500;
const SUBSTITUTION_TEMPERATURE: f64 = 0.7;
const SUBSTITUTION_MAX_TOKENS: u32 = 800;

/// Stateless handler shared by every tool invocation.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct RecipeHandler {
    provider: Arc<dyn CompletionProvider>,
    timeout: Duration,
}

impl std::fmt::Debug for RecipeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeHandler")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_id())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RecipeHandler {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Build a handler backed by the provider described in `config`.
    pub fn from_config(config: &RecipeConfig) -> Result<Self, RecipeError> {
        let provider: Arc<dyn CompletionProvider> = Arc::from(create_provider(config)?);
        Ok(Self::new(provider).with_timeout(config.request_timeout()))
    }

    /// Upper bound on a single provider call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Generate a recipe.
    ///
    /// Invalid requests fail before the provider is contacted. The provider is
    /// called once; its text is returned verbatim and its failures are not retried.
    pub async fn generate(&self, request: &RecipeRequest) -> Result<RecipeResult, RecipeError> {
        request.validate()?;

        let prompt = build_recipe_prompt(request);
        let settings = GenerationSettings::builder()
            .temperature(RECIPE_TEMPERATURE)
            .max_tokens(RECIPE_MAX_TOKENS)
            .build();

        info!(
            ingredients = request.ingredients.len(),
            cuisine = request.cuisine_constraint().unwrap_or("any"),
            "generating recipe"
        );

        let messages = vec![
            ModelMessage::system(CHEF_SYSTEM_PROMPT),
            ModelMessage::user(prompt),
        ];
        let response = self.complete(messages, settings).await.map_err(|e| {
            warn!(error = %e, "recipe generation failed");
            e
        })?;

        Ok(RecipeResult {
            text: response.text,
            ingredients_used: request.ingredients.clone(),
            cuisine: request.cuisine.clone(),
            diet: request.diet.clone(),
            model: self.provider.model_id().to_string(),
            usage: response.usage,
            generated_at: Utc::now(),
        })
    }

    /// Suggest replacements for a single ingredient.
    pub async fn suggest_substitutions(
        &self,
        request: &SubstitutionRequest,
    ) -> Result<SubstitutionResult, RecipeError> {
        request.validate()?;

        let prompt = build_substitution_prompt(request);
        let settings = GenerationSettings::builder()
            .temperature(SUBSTITUTION_TEMPERATURE)
            .max_tokens(SUBSTITUTION_MAX_TOKENS)
            .build();

        info!(ingredient = %request.ingredient, reason = %request.reason, "suggesting substitutions");

        // Substitutions go out as a lone user message.
        let messages = vec![ModelMessage::user(prompt)];
        let response = self.complete(messages, settings).await.map_err(|e| {
            warn!(error = %e, "substitution request failed");
            e
        })?;
        let substitutions = parse_substitutions(&response.text);
        debug!(count = substitutions.len(), "parsed substitutions");

        Ok(SubstitutionResult {
            ingredient: request.ingredient.trim().to_string(),
            reason: request.reason.clone(),
            flavor_profile: request.flavor_profile.clone(),
            substitutions,
        })
    }

    async fn complete(
        &self,
        messages: Vec<ModelMessage>,
        settings: GenerationSettings,
    ) -> Result<CompletionResponse, RecipeError> {
        let request = CompletionRequest::new(messages, settings);
        debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            "calling completion provider"
        );
        with_timeout(self.timeout, self.provider.complete(&request)).await
    }
}
