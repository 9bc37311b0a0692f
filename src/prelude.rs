//! Convenience re-exports for common use.

pub use crate::config::RecipeConfig;
pub use crate::error::{ErrorCategory, RecipeError, Result};
pub use crate::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
pub use crate::recipe::{
    RecipeHandler, RecipeRequest, RecipeResult, RecipeStyle, SubstitutionRequest,
    SubstitutionResult,
};
pub use crate::tools::{Tool, ToolArguments, ToolOutput, ToolRegistry};
pub use crate::types::{FinishReason, GenerationSettings, ModelMessage, Role, Usage};

#[cfg(feature = "mcp")]
pub use crate::mcp::RecipeMcpServer;
