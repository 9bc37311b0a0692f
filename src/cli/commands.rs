//! Handlers for the one-shot CLI commands.

use std::io::Write;

use crate::error::RecipeError;
use crate::recipe::{RecipeHandler, ServerDescriptor};

use super::{GenerateArgs, SubstituteArgs};

/// Generate a recipe and write its text to `out`.
pub async fn handle_generate(
    handler: &RecipeHandler,
    args: &GenerateArgs,
    out: &mut impl Write,
) -> Result<(), RecipeError> {
    let result = handler.generate(&args.to_request()).await?;
    writeln!(out, "{}", result.text)?;
    Ok(())
}

/// Print one substitute per line.
pub async fn handle_substitute(
    handler: &RecipeHandler,
    args: &SubstituteArgs,
    out: &mut impl Write,
) -> Result<(), RecipeError> {
    let result = handler.suggest_substitutions(&args.to_request()).await?;
    if result.substitutions.is_empty() {
        writeln!(out, "No substitutions suggested for {}.", result.ingredient)?;
        return Ok(());
    }
    for line in &result.substitutions {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the server description served as `config://server`.
pub fn handle_info(model: &str, out: &mut impl Write) -> Result<(), RecipeError> {
    let json = ServerDescriptor::new(model).to_json()?;
    writeln!(out, "{json}")?;
    Ok(())
}
