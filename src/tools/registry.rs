//! Name-indexed set of tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::Instrument;

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolExecutionContext, ToolOutput};
use crate::error::RecipeError;

/// Registered tools, listed in name order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any earlier tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> &mut Self {
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn tools(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Run a registered tool inside a span tagged with the call id.
    ///
    /// Returns `None` when no tool has that name.
    pub async fn execute(
        &self,
        name: &str,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Option<Result<ToolOutput, RecipeError>> {
        let tool = self.tools.get(name)?;
        let span = tracing::info_span!("tool_call", tool = name, call_id = %ctx.call_id);
        Some(tool.execute(args, ctx).instrument(span).await)
    }
}
