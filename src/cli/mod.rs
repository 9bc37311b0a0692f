//! Command-line interface for the recipe server.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::recipe::{RecipeRequest, RecipeStyle, SubstitutionRequest};

/// Recipe MCP server
#[derive(Parser, Debug)]
#[command(
    name = "recipe-server",
    version,
    about = "Generate recipes from ingredients, over MCP or from the terminal"
)]
pub struct Cli {
    /// Load environment variables from this file instead of `.env`
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Override OPENAI_MODEL
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the MCP tools over stdio
    Serve,
    /// Generate one recipe and print it
    Generate(GenerateArgs),
    /// Suggest substitutes for an ingredient
    Substitute(SubstituteArgs),
    /// Print the server description as JSON
    Info,
}

/// Arguments for `recipe-server generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Ingredient to use (repeat, or separate with commas)
    #[arg(short, long = "ingredient", value_delimiter = ',', required = true)]
    pub ingredients: Vec<String>,

    /// Cuisine style, e.g. italian
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// Dietary preference, e.g. vegan
    #[arg(short, long)]
    pub diet: Option<String>,

    /// detailed, simple or quick
    #[arg(short, long)]
    pub style: Option<RecipeStyle>,

    /// Maximum cooking time in minutes
    #[arg(short = 't', long)]
    pub cooking_time: Option<u32>,
}

impl GenerateArgs {
    pub fn to_request(&self) -> RecipeRequest {
        RecipeRequest {
            ingredients: self.ingredients.clone(),
            cuisine: self.cuisine.clone(),
            diet: self.diet.clone(),
            style: self.style,
            cooking_time_minutes: self.cooking_time,
        }
    }
}

/// Arguments for `recipe-server substitute`.
#[derive(Args, Debug)]
pub struct SubstituteArgs {
    /// Ingredient to replace
    pub ingredient: String,

    /// Why it needs replacing
    #[arg(short, long, default_value = "allergy")]
    pub reason: String,

    /// What the substitute should preserve
    #[arg(short, long, default_value = "similar taste")]
    pub flavor_profile: String,
}

impl SubstituteArgs {
    pub fn to_request(&self) -> SubstitutionRequest {
        SubstitutionRequest::new(self.ingredient.clone())
            .with_reason(self.reason.clone())
            .with_flavor_profile(self.flavor_profile.clone())
    }
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, `serve` when none was given.
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["recipe-server"]).unwrap();
        assert!(matches!(cli.command(), Commands::Serve));
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn parse_generate_with_constraints() {
        let cli = Cli::try_parse_from([
            "recipe-server",
            "generate",
            "-i",
            "rice,egg",
            "-i",
            "scallion",
            "--cuisine",
            "chinese",
            "--style",
            "Quick",
            "-t",
            "20",
        ])
        .unwrap();

        match cli.command() {
            Commands::Generate(args) => {
                let request = args.to_request();
                assert_eq!(request.ingredients, vec!["rice", "egg", "scallion"]);
                assert_eq!(request.cuisine.as_deref(), Some("chinese"));
                assert_eq!(request.diet, None);
                assert_eq!(request.style, Some(RecipeStyle::Quick));
                assert_eq!(request.cooking_time_minutes, Some(20));
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_requires_an_ingredient() {
        assert!(Cli::try_parse_from(["recipe-server", "generate"]).is_err());
    }

    #[test]
    fn parse_substitute_defaults() {
        let cli = Cli::try_parse_from(["recipe-server", "substitute", "butter"]).unwrap();
        match cli.command() {
            Commands::Substitute(args) => {
                let request = args.to_request();
                assert_eq!(request.ingredient, "butter");
                assert_eq!(request.reason, "allergy");
                assert_eq!(request.flavor_profile, "similar taste");
            }
            other => panic!("expected Substitute, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "recipe-server",
            "info",
            "--model",
            "gpt-4o-mini",
            "--env-file",
            "prod.env",
        ])
        .unwrap();
        assert!(matches!(cli.command(), Commands::Info));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(cli.env_file, Some(PathBuf::from("prod.env")));
    }
}
