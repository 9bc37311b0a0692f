//! Static description of the server, served as the `config://server` resource.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SERVER_NAME: &str = "Recipe Server";

/// Cuisines the server advertises. Requests are not restricted to these.
pub const SUPPORTED_CUISINES: &[&str] = &[
    "any",
    "italian",
    "mexican",
    "chinese",
    "indian",
    "french",
    "thai",
    "japanese",
    "american",
    "mediterranean",
];

/// Diets the server advertises. Requests are not restricted to these.
pub const SUPPORTED_DIETS: &[&str] = &[
    "none",
    "vegetarian",
    "vegan",
    "gluten_free",
    "dairy_free",
    "keto",
    "paleo",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    pub name: String,
    pub version: String,
    pub model: String,
    pub capabilities: BTreeMap<String, bool>,
    pub supported_cuisines: Vec<String>,
    pub supported_diets: Vec<String>,
}

impl ServerDescriptor {
    pub fn new(model: impl Into<String>) -> Self {
        let capabilities = [("recipe_generation", true), ("ingredient_substitutions", true)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            model: model.into(),
            capabilities,
            supported_cuisines: SUPPORTED_CUISINES.iter().map(|s| s.to_string()).collect(),
            supported_diets: SUPPORTED_DIETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
