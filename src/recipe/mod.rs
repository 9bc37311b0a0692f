//! Recipe generation: request model, prompts, and the tool handler.

pub mod catalog;
pub mod handler;
pub mod prompt;
pub mod request;
pub mod substitution;

pub use catalog::ServerDescriptor;
pub use handler::RecipeHandler;
pub use prompt::{build_recipe_prompt, build_substitution_prompt};
pub use request::{RecipeRequest, RecipeResult, RecipeStyle};
pub use substitution::{SubstitutionRequest, SubstitutionResult};
