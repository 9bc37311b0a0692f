//! rmcp `ServerHandler` over the recipe tool registry.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, CallToolRequestParams, CallToolResult, Implementation, ListResourcesResult,
    ListToolsResult, PaginatedRequestParams, RawResource, ReadResourceRequestParams,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use tracing::{debug, warn};

use super::bridge::{error_to_call_result, output_to_call_result, to_mcp_tool, to_tool_arguments};
use crate::recipe::{RecipeHandler, ServerDescriptor};
use crate::tools::{recipe_tools, ToolExecutionContext, ToolRegistry};

/// URI of the read-only server description resource.
pub const SERVER_CONFIG_URI: &str = "config://server";

const INSTRUCTIONS: &str = "Recipe server: call generate_recipe with a list of ingredients \
(plus optional cuisine, diet, style and cooking time) to get a complete recipe, or \
suggest_ingredient_substitutions to replace a single ingredient.";

/// MCP server. Cheap to clone; every clone shares the same tools.
#[derive(Clone, Debug)]
pub struct RecipeMcpServer {
    registry: Arc<ToolRegistry>,
    descriptor: Arc<ServerDescriptor>,
}

impl RecipeMcpServer {
    pub fn new(registry: ToolRegistry, descriptor: ServerDescriptor) -> Self {
        Self {
            registry: Arc::new(registry),
            descriptor: Arc::new(descriptor),
        }
    }

    /// Server exposing the recipe tools backed by `handler`.
    pub fn from_handler(handler: Arc<RecipeHandler>) -> Self {
        let descriptor = ServerDescriptor::new(handler.model_id());
        Self::new(recipe_tools(handler), descriptor)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn descriptor(&self) -> &ServerDescriptor {
        &self.descriptor
    }

    fn config_resource(&self) -> rmcp::model::Resource {
        let mut raw = RawResource::new(SERVER_CONFIG_URI, "server-config");
        raw.description = Some("Server name, version, model and supported options".into());
        raw.mime_type = Some("application/json".into());
        raw.no_annotation()
    }
}

impl ServerHandler for RecipeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.descriptor.name.clone(),
                version: self.descriptor.version.clone(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self
            .registry
            .tools()
            .map(|tool| to_mcp_tool(tool.as_ref()))
            .collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name: &str = &request.name;
        let args = to_tool_arguments(request.arguments);
        let ctx = ToolExecutionContext::default();

        match self.registry.execute(name, &args, &ctx).await {
            None => Err(ErrorData::invalid_params(format!("Unknown tool: {name}"), None)),
            Some(Ok(output)) => {
                debug!(tool = name, call_id = %ctx.call_id, "tool call succeeded");
                Ok(output_to_call_result(output))
            }
            Some(Err(error)) => {
                warn!(
                    tool = name,
                    call_id = %ctx.call_id,
                    category = ?error.category(),
                    error = %error,
                    "tool call failed"
                );
                Ok(error_to_call_result(&error))
            }
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(vec![self.config_resource()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri != SERVER_CONFIG_URI {
            return Err(ErrorData::resource_not_found(
                format!("Unknown resource: {}", request.uri),
                None,
            ));
        }

        let json = self
            .descriptor
            .to_json()
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(json, SERVER_CONFIG_URI)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
    use crate::error::RecipeError;
    use async_trait::async_trait;

    struct Canned;

    #[async_trait]
    impl CompletionProvider for Canned {
        fn provider_name(&self) -> &str {
            "canned"
        }

        fn model_id(&self) -> &str {
            "canned-model"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, RecipeError> {
            Ok(CompletionResponse::text("ok"))
        }
    }

    fn server() -> RecipeMcpServer {
        RecipeMcpServer::from_handler(Arc::new(RecipeHandler::new(Arc::new(Canned))))
    }

    #[test]
    fn info_advertises_tools_and_resources() {
        let info = server().get_info();

        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.server_info.name, "Recipe Server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn descriptor_reports_handler_model() {
        let server = server();
        assert_eq!(server.descriptor().model, "canned-model");
        assert_eq!(
            server.registry().names(),
            vec!["generate_recipe", "suggest_ingredient_substitutions"]
        );
    }

    #[test]
    fn config_resource_is_json() {
        let resource = server().config_resource();
        assert_eq!(resource.uri, SERVER_CONFIG_URI);
        assert_eq!(resource.mime_type.as_deref(), Some("application/json"));
    }
}
