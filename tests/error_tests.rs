//! Tests for error classification.

use recipe_mcp::error::{ErrorCategory, ErrorCode, ErrorDetails, RecipeError};

struct CategoryCase {
    error: RecipeError,
    expected: ErrorCategory,
}

#[test]
fn errors_map_to_categories() {
    let cases = vec![
        CategoryCase {
            error: RecipeError::InvalidRequest("At least one ingredient is required".into()),
            expected: ErrorCategory::InvalidRequest,
        },
        CategoryCase {
            error: RecipeError::Authentication("bad key".into()),
            expected: ErrorCategory::Provider,
        },
        CategoryCase {
            error: RecipeError::api(500, "boom"),
            expected: ErrorCategory::Provider,
        },
        CategoryCase {
            error: RecipeError::RateLimited { retry_after_ms: None },
            expected: ErrorCategory::Provider,
        },
        CategoryCase {
            error: RecipeError::Timeout(120_000),
            expected: ErrorCategory::Provider,
        },
        CategoryCase {
            error: RecipeError::MalformedResponse("no choices".into()),
            expected: ErrorCategory::Provider,
        },
        CategoryCase {
            error: RecipeError::Configuration("missing key".into()),
            expected: ErrorCategory::Configuration,
        },
        CategoryCase {
            error: RecipeError::Transport("stdin closed".into()),
            expected: ErrorCategory::Transport,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected, "{}", case.error);
    }
}

#[test]
fn serialization_failures_are_provider_errors() {
    let err: RecipeError = serde_json::from_str::<serde_json::Value>("{not json")
        .unwrap_err()
        .into();
    assert!(err.is_provider_error());
    assert_eq!(err.code(), ErrorCode::MalformedResponse);
}

#[test]
fn api_codes_prefer_provider_details() {
    let details = ErrorDetails {
        code: Some(ErrorCode::InsufficientQuota),
        provider_code: Some("insufficient_quota".into()),
        param: None,
    };
    let err = RecipeError::api_with_details(429, "quota", details);
    assert_eq!(err.code(), ErrorCode::InsufficientQuota);

    assert_eq!(RecipeError::api(404, "missing").code(), ErrorCode::ModelNotFound);
    assert_eq!(RecipeError::api(503, "down").code(), ErrorCode::ServerError);
    assert_eq!(RecipeError::api(418, "teapot").code(), ErrorCode::Unknown);
}

#[test]
fn provider_codes_parse() {
    assert_eq!(
        ErrorCode::from_provider_code("context_length_exceeded"),
        ErrorCode::ContextLengthExceeded
    );
    assert_eq!(ErrorCode::from_provider_code("something_new"), ErrorCode::Unknown);
}

#[test]
fn display_messages_are_readable() {
    assert_eq!(
        RecipeError::InvalidRequest("Too many ingredients (maximum 20)".into()).to_string(),
        "Invalid request: Too many ingredients (maximum 20)"
    );
    assert_eq!(RecipeError::Timeout(5000).to_string(), "Timeout after 5000ms");
    assert_eq!(
        RecipeError::api(500, "boom").to_string(),
        "API error (status 500): boom"
    );
}
