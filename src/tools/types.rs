//! JSON Schema parameter definitions for tools.

use serde::{Deserialize, Serialize};

/// JSON Schema-based parameter definition for a tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolParameters {
    /// JSON Schema object describing the parameters.
    pub schema: serde_json::Value,
}

impl ToolParameters {
    /// Builder: create an object schema with properties.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder {
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    /// The schema as a JSON object map, as MCP expects it.
    pub fn as_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.schema.as_object().cloned().unwrap_or_default()
    }
}

/// Builder for constructing tool parameter schemas.
pub struct ParameterBuilder {
    properties: serde_json::Map<String, serde_json::Value>,
    required: Vec<String>,
}

impl ParameterBuilder {
    fn property(mut self, name: impl Into<String>, schema: serde_json::Value, required: bool) -> Self {
        let name = name.into();
        self.properties.insert(name.clone(), schema);
        if required {
            self.required.push(name);
        }
        self
    }

    /// Add a string property.
    pub fn string(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        let schema = serde_json::json!({
            "type": "string",
            "description": description.into(),
        });
        self.property(name, schema, required)
    }

    /// Add a string property with a default value.
    pub fn string_with_default(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        default: &str,
    ) -> Self {
        let schema = serde_json::json!({
            "type": "string",
            "description": description.into(),
            "default": default,
        });
        self.property(name, schema, false)
    }

    /// Add a non-negative integer property.
    pub fn integer(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        let schema = serde_json::json!({
            "type": "integer",
            "minimum": 0,
            "description": description.into(),
        });
        self.property(name, schema, required)
    }

    /// Add an array-of-strings property with item bounds.
    pub fn string_array(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        min_items: usize,
        max_items: usize,
        required: bool,
    ) -> Self {
        let schema = serde_json::json!({
            "type": "array",
            "items": { "type": "string" },
            "minItems": min_items,
            "maxItems": max_items,
            "description": description.into(),
        });
        self.property(name, schema, required)
    }

    /// Add an enum (string) property.
    pub fn string_enum(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        values: &[&str],
        required: bool,
    ) -> Self {
        let schema = serde_json::json!({
            "type": "string",
            "description": description.into(),
            "enum": values,
        });
        self.property(name, schema, required)
    }

    /// Build into ToolParameters.
    pub fn build(self) -> ToolParameters {
        ToolParameters {
            schema: serde_json::json!({
                "type": "object",
                "properties": self.properties,
                "required": self.required,
            }),
        }
    }
}
