//! Invocable tools: the `Tool` definition, its imperative registry,
//! and the reducer that tracks registered tools.
//!
//! Tools are keyed by `name`, agents by `id`. The two are kept distinct.

mod reducer;
mod registry;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use reducer::{reduce, ToolsState};
pub use registry::ToolRegistry;

/// An invocable capability exposed to agents.
///
/// Only `name` is interpreted; description, parameter schema and any
/// host-specific fields stay in `extra` as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_extra("description", description.into())
    }

    /// JSON schema of the call arguments
    pub fn with_parameters(self, parameters: Value) -> Self {
        self.with_extra("parameters", parameters)
    }

    /// Attach an opaque field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").and_then(Value::as_str)
    }

    pub fn parameters(&self) -> Option<&Value> {
        self.extra.get("parameters")
    }

    /// Reject tools that cannot be keyed
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingToolName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_tool_with_parameters() {
        let parameters = json!({
            "type": "object",
            "properties": { "location": { "type": "string" } },
            "required": ["location"]
        });
        let tool = Tool::new("geocode")
            .with_description("Resolve a place name to coordinates")
            .with_parameters(parameters.clone());

        assert_eq!(tool.description(), Some("Resolve a place name to coordinates"));
        assert_eq!(tool.parameters(), Some(&parameters));
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({
                "name": "geocode",
                "description": "Resolve a place name to coordinates",
                "parameters": parameters
            })
        );
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let tool: Tool = serde_json::from_value(json!({ "name": "geo", "v": 2 })).unwrap();
        assert_eq!(tool, Tool::new("geo").with_extra("v", 2));
    }

    #[test]
    fn test_fields_of_any_shape_are_opaque() {
        let wire = json!({ "name": "geo", "description": { "en": "Geocoder" }, "parameters": null });
        let tool: Tool = serde_json::from_value(wire.clone()).unwrap();

        assert_eq!(tool.description(), None);
        assert_eq!(serde_json::to_value(&tool).unwrap(), wire);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(matches!(Tool::new("").validate(), Err(Error::MissingToolName)));
        assert!(Tool::new("geo").validate().is_ok());
    }
}
