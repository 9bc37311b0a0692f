//! Request and result types for recipe generation.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::RecipeError;
use crate::types::Usage;

/// Upper bound on ingredients per request.
pub const MAX_INGREDIENTS: usize = 20;

/// Cuisine value meaning "no preference".
pub const ANY_CUISINE: &str = "any";

/// Diet value meaning "no restriction".
pub const NO_DIET: &str = "none";

/// What the caller wants a recipe for.
///
/// `cuisine` and `diet` are free-form and passed into the prompt as given.
/// On the wire, `diet` is also accepted as `dietary_preference`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[builder(into)]
    #[serde(default, alias = "dietary_preference", skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<RecipeStyle>,
    #[serde(default, alias = "cooking_time", skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<u32>,
}

impl RecipeRequest {
    /// Request with only ingredients set.
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cuisine: None,
            diet: None,
            style: None,
            cooking_time_minutes: None,
        }
    }

    /// Reject requests that must not reach the provider.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.ingredients.is_empty() {
            return Err(RecipeError::InvalidRequest(
                "At least one ingredient is required".into(),
            ));
        }
        if self.ingredients.len() > MAX_INGREDIENTS {
            return Err(RecipeError::InvalidRequest(format!(
                "Too many ingredients (maximum {MAX_INGREDIENTS})"
            )));
        }
        Ok(())
    }

    /// Cuisine constraint, ignoring blanks and the "any" sentinel.
    pub fn cuisine_constraint(&self) -> Option<&str> {
        constraint(self.cuisine.as_deref(), ANY_CUISINE)
    }

    /// Diet constraint, ignoring blanks and the "none" sentinel.
    pub fn diet_constraint(&self) -> Option<&str> {
        constraint(self.diet.as_deref(), NO_DIET)
    }

    pub fn style_or_default(&self) -> RecipeStyle {
        self.style.unwrap_or_default()
    }
}

fn constraint<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && !v.eq_ignore_ascii_case(sentinel)
    })
}

/// Level of detail asked of the model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RecipeStyle {
    #[default]
    Detailed,
    Simple,
    Quick,
}

/// A generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    /// Provider output, unmodified.
    pub text: String,
    pub ingredients_used: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    pub model: String,
    pub usage: Usage,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_ingredients_are_rejected() {
        let err = RecipeRequest::new(Vec::<String>::new())
            .validate()
            .expect_err("empty list must fail");
        assert!(matches!(err, RecipeError::InvalidRequest(m) if m.contains("At least one")));
    }

    #[test]
    fn too_many_ingredients_are_rejected() {
        let many = (0..=MAX_INGREDIENTS).map(|i| format!("item{i}"));
        let err = RecipeRequest::new(many).validate().expect_err("21 must fail");
        assert!(matches!(err, RecipeError::InvalidRequest(m) if m.contains("maximum 20")));

        let exactly = (0..MAX_INGREDIENTS).map(|i| format!("item{i}"));
        assert!(RecipeRequest::new(exactly).validate().is_ok());
    }

    #[test]
    fn blank_ingredient_entries_are_accepted() {
        assert!(RecipeRequest::new(["rice", "  "]).validate().is_ok());
        assert!(RecipeRequest::new([""]).validate().is_ok());
    }

    #[test]
    fn sentinels_mean_no_constraint() {
        let request = RecipeRequest::builder()
            .ingredients(vec!["rice".into()])
            .cuisine("Any")
            .diet("none")
            .build();
        assert_eq!(request.cuisine_constraint(), None);
        assert_eq!(request.diet_constraint(), None);

        let request = RecipeRequest::builder()
            .ingredients(vec!["rice".into()])
            .cuisine("thai")
            .diet("vegan")
            .build();
        assert_eq!(request.cuisine_constraint(), Some("thai"));
        assert_eq!(request.diet_constraint(), Some("vegan"));
    }

    #[test]
    fn accepts_alias_argument_names() {
        let request: RecipeRequest = serde_json::from_value(json!({
            "ingredients": ["tofu", "bok choy"],
            "cuisine": "chinese",
            "dietary_preference": "vegan",
            "style": "quick",
            "cooking_time": 20
        }))
        .expect("arguments should deserialize");

        assert_eq!(request.ingredients, vec!["tofu", "bok choy"]);
        assert_eq!(request.diet.as_deref(), Some("vegan"));
        assert_eq!(request.style, Some(RecipeStyle::Quick));
        assert_eq!(request.cooking_time_minutes, Some(20));
    }

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!("Simple".parse::<RecipeStyle>().ok(), Some(RecipeStyle::Simple));
        assert_eq!(RecipeStyle::default().to_string(), "detailed");
    }
}
