//! HTTP client construction and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};

use crate::error::{ErrorCode, ErrorDetails, RecipeError};

/// Build a reqwest client for one provider instance.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, RecipeError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(RecipeError::Network)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap, RecipeError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        RecipeError::Configuration("API key contains characters not allowed in a header".into())
    })?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Map a non-success HTTP status and body to an error.
pub fn status_to_error(status: u16, body: &str) -> RecipeError {
    match status {
        401 | 403 => RecipeError::Authentication(error_message(body)),
        429 => RecipeError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => match extract_details(body) {
            Some(details) => RecipeError::api_with_details(status, error_message(body), details),
            None => RecipeError::api(status, error_message(body)),
        },
    }
}

/// Map a non-success response, taking the `retry-after` header over any body hint.
pub fn response_to_error(status: u16, headers: &HeaderMap, body: &str) -> RecipeError {
    match status_to_error(status, body) {
        RecipeError::RateLimited { retry_after_ms } => RecipeError::RateLimited {
            retry_after_ms: retry_after_from_headers(headers).or(retry_after_ms),
        },
        other => other,
    }
}

/// `retry-after` in (possibly fractional) seconds, as milliseconds.
pub fn retry_after_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| *secs >= 0.0)
        .map(|secs| (secs * 1000.0) as u64)
}

/// Prefer `error.message` from an OpenAI-style body, else the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn extract_details(body: &str) -> Option<ErrorDetails> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    let provider_code = error
        .get("code")
        .and_then(|c| c.as_str())
        .or_else(|| error.get("type").and_then(|t| t.as_str()))
        .map(str::to_string);
    Some(ErrorDetails {
        code: provider_code.as_deref().map(ErrorCode::from_provider_code),
        provider_code,
        param: error
            .get("param")
            .and_then(|p| p.as_str())
            .map(str::to_string),
    })
}

fn extract_retry_after(body: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}
