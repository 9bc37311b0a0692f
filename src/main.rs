//! Recipe server binary entry point.

use std::sync::Arc;

use recipe_mcp::cli::commands::{handle_generate, handle_info, handle_substitute};
use recipe_mcp::cli::{Cli, Commands};
use recipe_mcp::config::RecipeConfig;
use recipe_mcp::error::RecipeError;
use recipe_mcp::mcp::{serve_stdio, RecipeMcpServer};
use recipe_mcp::recipe::RecipeHandler;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout is reserved for MCP frames.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), RecipeError> {
    let mut config = match &cli.env_file {
        Some(path) => RecipeConfig::from_env_file(path)?,
        None => RecipeConfig::from_env(),
    };
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }

    if let Commands::Info = cli.command() {
        return handle_info(config.model(), &mut std::io::stdout());
    }

    if let Err(e) = config.validate() {
        warn!(error = %e, "configuration check failed");
    }
    let handler = RecipeHandler::from_config(&config)?;

    match cli.command() {
        Commands::Serve => {
            info!(model = config.model(), "starting recipe server");
            serve_stdio(RecipeMcpServer::from_handler(Arc::new(handler))).await
        }
        Commands::Generate(args) => handle_generate(&handler, args, &mut std::io::stdout()).await,
        Commands::Substitute(args) => {
            handle_substitute(&handler, args, &mut std::io::stdout()).await
        }
        Commands::Info => handle_info(config.model(), &mut std::io::stdout()),
    }
}
