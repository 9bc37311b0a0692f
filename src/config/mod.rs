//! Configuration system (layered: explicit setters > env > `.env` file).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{RecipeError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_MODEL: &str = "OPENAI_MODEL";
const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
const ENV_TIMEOUT: &str = "RECIPE_REQUEST_TIMEOUT_SECS";

/// Settings for reaching the completion provider.
#[derive(Clone)]
pub struct RecipeConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    request_timeout: Duration,
}

// Keep the key out of logs.
impl fmt::Debug for RecipeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeConfig {
    /// Config with defaults and no credentials.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // a missing .env is fine
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an explicit env file, then the process environment.
    ///
    /// Unlike [`RecipeConfig::from_env`], a missing or unreadable file is an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| {
            RecipeError::Configuration(format!("failed to load {}: {e}", path.display()))
        })?;
        Ok(Self::from_vars(|key| std::env::var(key).ok()))
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. An unparsable timeout falls back to the default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(key) = get(ENV_API_KEY) {
            config.api_key = Some(key);
        }
        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }
        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT}"),
            }
        }

        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check that the credential looks usable.
    pub fn validate(&self) -> Result<()> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(RecipeError::Configuration(format!(
                "{ENV_API_KEY} environment variable is required"
            )));
        };
        if !key.starts_with("sk-") {
            return Err(RecipeError::Configuration(format!(
                "{ENV_API_KEY} appears to be invalid"
            )));
        }
        Ok(())
    }
}
