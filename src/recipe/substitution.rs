//! Ingredient substitution requests.

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

fn default_reason() -> String {
    "allergy".to_string()
}

fn default_flavor_profile() -> String {
    "similar taste".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionRequest {
    pub ingredient: String,
    #[serde(default = "default_reason")]
    pub reason: String,
    #[serde(default = "default_flavor_profile")]
    pub flavor_profile: String,
}

impl SubstitutionRequest {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            reason: default_reason(),
            flavor_profile: default_flavor_profile(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_flavor_profile(mut self, flavor_profile: impl Into<String>) -> Self {
        self.flavor_profile = flavor_profile.into();
        self
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.ingredient.trim().is_empty() {
            return Err(RecipeError::InvalidRequest(
                "Ingredient cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionResult {
    pub ingredient: String,
    pub reason: String,
    pub flavor_profile: String,
    pub substitutions: Vec<String>,
}

/// Split provider text into one entry per non-empty line.
pub fn parse_substitutions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
