//! Host transports for the MCP server.

use rmcp::ServiceExt;
use tracing::info;

use super::server::RecipeMcpServer;
use crate::error::RecipeError;

/// Serve over stdin/stdout until the host disconnects.
///
/// stdout carries protocol frames only; logs must go to stderr.
pub async fn serve_stdio(server: RecipeMcpServer) -> Result<(), RecipeError> {
    info!(
        tools = server.registry().len(),
        model = %server.descriptor().model,
        "serving MCP over stdio"
    );

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| RecipeError::Transport(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| RecipeError::Transport(e.to_string()))?;
    info!(?reason, "MCP session ended");
    Ok(())
}
