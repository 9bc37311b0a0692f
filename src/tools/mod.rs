//! Tool system: the operations the server exposes to its host.

pub mod arguments;
pub mod recipe;
pub mod registry;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use recipe::{recipe_tools, GenerateRecipeTool, SuggestSubstitutionsTool};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolExecutionContext, ToolOutput};
pub use types::ToolParameters;
