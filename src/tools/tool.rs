//! Tool trait and per-call context.

use async_trait::async_trait;
use uuid::Uuid;

use super::arguments::ToolArguments;
use super::types::ToolParameters;
use crate::error::RecipeError;

/// Context available during tool execution.
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    /// Unique id for this invocation, recorded in logs.
    pub call_id: Uuid,
}

impl Default for ToolExecutionContext {
    fn default() -> Self {
        Self {
            call_id: Uuid::new_v4(),
        }
    }
}

/// What a tool hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Plain text, delivered verbatim.
    Text(String),
    /// Structured JSON.
    Json(serde_json::Value),
}

/// Core tool trait: implement to expose an operation to the host.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the host calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &ToolParameters;

    /// Execute the tool with the raw call arguments.
    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolOutput, RecipeError>;
}
