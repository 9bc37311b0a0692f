//! Tests for configuration loading.

use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use recipe_mcp::config::{RecipeConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use recipe_mcp::error::RecipeError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 4] = [
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "OPENAI_BASE_URL",
    "RECIPE_REQUEST_TIMEOUT_SECS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_config_env() {
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_without_environment() {
    let config = RecipeConfig::new();
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.request_timeout(), Duration::from_secs(120));
    assert!(!config.has_credentials());
}

#[test]
fn env_file_values_are_loaded() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_config_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "OPENAI_API_KEY=sk-from-file").unwrap();
    writeln!(file, "OPENAI_MODEL=gpt-4o-mini").unwrap();
    writeln!(file, "OPENAI_BASE_URL=http://localhost:8080/v1/").unwrap();
    writeln!(file, "RECIPE_REQUEST_TIMEOUT_SECS=30").unwrap();

    let config = RecipeConfig::from_env_file(file.path()).expect("env file should load");

    assert_eq!(config.api_key(), Some("sk-from-file"));
    assert_eq!(config.model(), "gpt-4o-mini");
    assert_eq!(config.base_url(), "http://localhost:8080/v1");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
fn process_environment_wins_over_env_file() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_config_env();
    std::env::set_var("OPENAI_MODEL", "gpt-4-turbo");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "OPENAI_MODEL=gpt-3.5-turbo").unwrap();

    let config = RecipeConfig::from_env_file(file.path()).unwrap();
    assert_eq!(config.model(), "gpt-4-turbo");
}

#[test]
fn missing_env_file_is_a_configuration_error() {
    let err = RecipeConfig::from_env_file("/nonexistent/recipe.env").unwrap_err();
    assert!(matches!(err, RecipeError::Configuration(ref m) if m.contains("recipe.env")));
}

#[test]
fn validate_requires_key() {
    let err = RecipeConfig::new().validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: OPENAI_API_KEY environment variable is required"
    );
}

#[test]
fn validate_flags_unexpected_key_format() {
    let err = RecipeConfig::new()
        .with_api_key("not-a-real-key")
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("appears to be invalid"));
}

#[test]
fn handler_requires_credentials() {
    let err = recipe_mcp::recipe::RecipeHandler::from_config(&RecipeConfig::new()).unwrap_err();
    assert!(matches!(err, RecipeError::Authentication(_)));
}
