//! recipe-mcp: recipe generation exposed as MCP tools.
//!
//! A host (Claude Desktop, an IDE, any MCP client) calls `generate_recipe`
//! with a list of ingredients and optional cuisine, diet and style
//! constraints. The server builds one prompt, makes one completion call and
//! returns the generated text unchanged.
//!
//! # Quick Start
//!
//! ```no_run
//! use recipe_mcp::prelude::*;
//!
//! # async fn example() -> recipe_mcp::error::Result<()> {
//! let config = RecipeConfig::from_env();
//! let handler = RecipeHandler::from_config(&config)?;
//!
//! let request = RecipeRequest::builder()
//!     .ingredients(vec!["chickpeas".into(), "spinach".into()])
//!     .cuisine("indian")
//!     .build();
//! let recipe = handler.generate(&request).await?;
//! println!("{}", recipe.text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod recipe;
pub mod tools;
pub mod types;
pub mod util;

#[cfg(feature = "mcp")]
pub mod mcp;

#[cfg(feature = "cli")]
pub mod cli;
