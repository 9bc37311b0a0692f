//! The recipe tools exposed to the host.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::arguments::ToolArguments;
use super::registry::ToolRegistry;
use super::tool::{Tool, ToolExecutionContext, ToolOutput};
use super::types::ToolParameters;
use crate::error::RecipeError;
use crate::recipe::request::{ANY_CUISINE, MAX_INGREDIENTS, NO_DIET};
use crate::recipe::{RecipeHandler, RecipeRequest, SubstitutionRequest};

pub const GENERATE_RECIPE: &str = "generate_recipe";
pub const SUGGEST_SUBSTITUTIONS: &str = "suggest_ingredient_substitutions";

/// `generate_recipe`: ingredients (+ optional constraints) to recipe text.
pub struct GenerateRecipeTool {
    handler: Arc<RecipeHandler>,
    parameters: ToolParameters,
}

impl GenerateRecipeTool {
    pub fn new(handler: Arc<RecipeHandler>) -> Self {
        let parameters = ToolParameters::object()
            .string_array(
                "ingredients",
                "Ingredients to cook with, in order of importance",
                1,
                MAX_INGREDIENTS,
                true,
            )
            .string_with_default("cuisine", "Cuisine style, e.g. italian or thai", ANY_CUISINE)
            .string_with_default(
                "diet",
                "Dietary preference, e.g. vegetarian or gluten_free",
                NO_DIET,
            )
            .string_enum(
                "style",
                "How detailed the recipe should be",
                &["detailed", "simple", "quick"],
                false,
            )
            .integer(
                "cooking_time_minutes",
                "Maximum total cooking time in minutes",
                false,
            )
            .build();
        Self {
            handler,
            parameters,
        }
    }
}

#[async_trait]
impl Tool for GenerateRecipeTool {
    fn name(&self) -> &str {
        GENERATE_RECIPE
    }

    fn description(&self) -> &str {
        "Generate a recipe from a list of available ingredients, with optional cuisine and diet preferences."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _ctx: &ToolExecutionContext,
    ) -> Result<ToolOutput, RecipeError> {
        let request: RecipeRequest = args.deserialize()?;
        let result = self.handler.generate(&request).await?;
        debug!(chars = result.text.len(), "recipe ready");
        Ok(ToolOutput::Text(result.text))
    }
}

/// `suggest_ingredient_substitutions`: one ingredient to a list of replacements.
pub struct SuggestSubstitutionsTool {
    handler: Arc<RecipeHandler>,
    parameters: ToolParameters,
}

impl SuggestSubstitutionsTool {
    pub fn new(handler: Arc<RecipeHandler>) -> Self {
        let parameters = ToolParameters::object()
            .string("ingredient", "Ingredient to replace", true)
            .string_with_default(
                "reason",
                "Why it needs replacing, e.g. allergy or vegan",
                "allergy",
            )
            .string_with_default(
                "flavor_profile",
                "What the substitute should preserve",
                "similar taste",
            )
            .build();
        Self {
            handler,
            parameters,
        }
    }
}

#[async_trait]
impl Tool for SuggestSubstitutionsTool {
    fn name(&self) -> &str {
        SUGGEST_SUBSTITUTIONS
    }

    fn description(&self) -> &str {
        "Suggest substitutes for an ingredient, with the reason and any quantity adjustments."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _ctx: &ToolExecutionContext,
    ) -> Result<ToolOutput, RecipeError> {
        let request: SubstitutionRequest = args.deserialize()?;
        let result = self.handler.suggest_substitutions(&request).await?;
        Ok(ToolOutput::Json(serde_json::to_value(result)?))
    }
}

/// Registry holding every recipe tool, all sharing one handler.
pub fn recipe_tools(handler: Arc<RecipeHandler>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(Arc::new(GenerateRecipeTool::new(Arc::clone(&handler))))
        .register(Arc::new(SuggestSubstitutionsTool::new(handler)));
    registry
}
