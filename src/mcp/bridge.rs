//! Bridge the crate's tool system onto rmcp model types.

use rmcp::model::{CallToolResult, Content, JsonObject};

use crate::error::RecipeError;
use crate::tools::{Tool, ToolArguments, ToolOutput};

/// Describe a registered tool for `tools/list`.
pub fn to_mcp_tool(tool: &dyn Tool) -> rmcp::model::Tool {
    rmcp::model::Tool::new(
        tool.name().to_string(),
        tool.description().to_string(),
        tool.parameters().as_object(),
    )
}

/// Wrap `tools/call` arguments.
pub fn to_tool_arguments(arguments: Option<JsonObject>) -> ToolArguments {
    match arguments {
        Some(map) => ToolArguments::new(serde_json::Value::Object(map)),
        None => ToolArguments::new(serde_json::Value::Null),
    }
}

/// Successful output. Text is passed through unchanged.
pub fn output_to_call_result(output: ToolOutput) -> CallToolResult {
    match output {
        ToolOutput::Text(text) => CallToolResult::success(vec![Content::text(text)]),
        ToolOutput::Json(value) => CallToolResult::structured(value),
    }
}

/// A failed tool call: the caller gets the message with `isError: true`.
pub fn error_to_call_result(error: &RecipeError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(error.to_string())])
}
