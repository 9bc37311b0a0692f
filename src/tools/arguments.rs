//! Typed access to tool call arguments.

use crate::error::RecipeError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Deserialize the entire arguments into a typed struct.
    ///
    /// Missing arguments (`null`) deserialize as an empty object, and a
    /// stringified JSON object is accepted. Any mismatch is an invalid request.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, RecipeError> {
        let value = match &self.value {
            serde_json::Value::Null => serde_json::json!({}),
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str::<serde_json::Value>(trimmed).map_err(|e| {
                        RecipeError::InvalidRequest(format!("Failed to parse arguments: {e}"))
                    })?
                }
            }
            other => other.clone(),
        };
        serde_json::from_value(value)
            .map_err(|e| RecipeError::InvalidRequest(format!("Invalid arguments: {e}")))
    }
}

impl From<serde_json::Value> for ToolArguments {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}
