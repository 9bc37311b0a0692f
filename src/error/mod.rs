//! Error types for the recipe server.

pub mod unified;

pub use unified::{ErrorCategory, ErrorCode, ErrorDetails};

use thiserror::Error;

/// Primary error type for all recipe server operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<ErrorDetails>,
    },

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {0}")]
    Transport(String),
}

impl RecipeError {
    /// Create an API error without details.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Create an API error with structured provider details.
    pub fn api_with_details(status: u16, message: impl Into<String>, details: ErrorDetails) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details: Some(details),
        }
    }

    /// Classify this error.
    ///
    /// Everything that happened while talking to the completion provider
    /// (including timeouts and bad payloads) is a provider error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest(_) => ErrorCategory::InvalidRequest,
            Self::Configuration(_) | Self::Io(_) => ErrorCategory::Configuration,
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Authentication(_)
            | Self::Api { .. }
            | Self::RateLimited { .. }
            | Self::Timeout(_)
            | Self::Network(_)
            | Self::Serialization(_)
            | Self::MalformedResponse(_) => ErrorCategory::Provider,
        }
    }

    pub fn is_invalid_request(&self) -> bool {
        self.category() == ErrorCategory::InvalidRequest
    }

    pub fn is_provider_error(&self) -> bool {
        self.category() == ErrorCategory::Provider
    }

    /// Machine-readable code, when one can be derived.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::Authentication(_) => ErrorCode::InvalidApiKey,
            Self::RateLimited { .. } => ErrorCode::RateLimitExceeded,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::Network(_) => ErrorCode::NetworkError,
            Self::MalformedResponse(_) | Self::Serialization(_) => ErrorCode::MalformedResponse,
            Self::Api {
                details: Some(ErrorDetails { code: Some(code), .. }),
                ..
            } => *code,
            Self::Api { status, .. } => match status {
                404 => ErrorCode::ModelNotFound,
                500..=599 => ErrorCode::ServerError,
                _ => ErrorCode::Unknown,
            },
            Self::Configuration(_) | Self::Io(_) | Self::Transport(_) => ErrorCode::Unknown,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RecipeError>;
