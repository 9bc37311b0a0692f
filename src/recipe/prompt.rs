//! Prompt construction.

use super::request::RecipeRequest;
use super::substitution::SubstitutionRequest;

/// System message sent with every recipe request.
pub const CHEF_SYSTEM_PROMPT: &str =
    "You are a professional chef. Create practical, delicious recipes.";

/// Build the user prompt for a recipe request.
///
/// Each ingredient appears exactly once, in request order, joined by `", "`.
/// Cuisine, diet, style and cooking time are embedded as given.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let mut ask = format!("Create a {} recipe", request.style_or_default());
    if let Some(diet) = request.diet_constraint() {
        ask.push_str(&format!(" that is {diet}"));
    }
    if let Some(cuisine) = request.cuisine_constraint() {
        ask.push_str(&format!(" in {cuisine} style"));
    }
    if let Some(minutes) = request.cooking_time_minutes {
        ask.push_str(&format!(" that can be made within {minutes} minutes"));
    }

    format!(
        "{ask}.\n\
         Use these ingredients: {}.\n\
         \n\
         Structure the answer with:\n\
         - A creative title\n\
         - Everything needed, adding common pantry staples where useful\n\
         - Clear, numbered cooking steps\n\
         - Estimated total time\n\
         - Difficulty level\n\
         - Number of servings\n\
         - Helpful tips or variations",
        request.ingredients.join(", ")
    )
}

/// Build the user prompt for an ingredient substitution request.
pub fn build_substitution_prompt(request: &SubstitutionRequest) -> String {
    format!(
        "Suggest 3-5 good substitutions for {} (reason: {}; aim for: {}).\n\
         For each one give the substitute, why it works, and any change in quantity or preparation.\n\
         Answer as a plain bulleted list, one substitute per line.",
        request.ingredient.trim(),
        request.reason,
        request.flavor_profile
    )
}
