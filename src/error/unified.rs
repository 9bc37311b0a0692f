//! Error classification shared by the handler and the MCP layer.

use serde::{Deserialize, Serialize};

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidApiKey,
    InsufficientQuota,
    RateLimitExceeded,
    ModelNotFound,
    InvalidRequest,
    ContentFiltered,
    ContextLengthExceeded,
    MalformedResponse,
    ServerError,
    Timeout,
    NetworkError,
    Unknown,
}

impl ErrorCode {
    /// Map an OpenAI-style `error.code` / `error.type` string.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "invalid_api_key" => Self::InvalidApiKey,
            "insufficient_quota" => Self::InsufficientQuota,
            "rate_limit_exceeded" => Self::RateLimitExceeded,
            "model_not_found" => Self::ModelNotFound,
            "invalid_request_error" => Self::InvalidRequest,
            "content_filter" => Self::ContentFiltered,
            "context_length_exceeded" => Self::ContextLengthExceeded,
            "server_error" => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

/// Broad error category, mirroring what the caller of a tool sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request was rejected before any provider call.
    InvalidRequest,
    /// The completion provider failed or answered with something unusable.
    Provider,
    /// Local setup problem (missing credentials, unreadable env file).
    Configuration,
    /// The host connection failed.
    Transport,
}

/// Structured details returned by a provider API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    pub code: Option<ErrorCode>,
    pub provider_code: Option<String>,
    pub param: Option<String>,
}
