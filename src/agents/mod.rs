//! Conversational agents: the `Agent` definition, its imperative registry,
//! and the reducer that tracks registered agents and the active one.

mod reducer;
mod registry;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use reducer::{reduce, AgentsState};
pub use registry::AgentRegistry;

/// A configured conversational persona.
///
/// Only `id` is interpreted by the registry and reducer. Every other field
/// (instructions, toolkits, callbacks, ...) is kept verbatim in `extra`,
/// whatever its shape. The accessors below read the common ones when they
/// have the expected shape and return nothing otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_extra("name", name.into())
    }

    pub fn with_instructions(self, instructions: impl Into<String>) -> Self {
        self.with_extra("instructions", instructions.into())
    }

    /// Append a tool name to `toolkits`, replacing it if it is not a list
    pub fn with_toolkit(mut self, tool_name: impl Into<String>) -> Self {
        let toolkits = self
            .extra
            .entry("toolkits")
            .or_insert_with(|| Value::Array(Vec::new()));
        if !toolkits.is_array() {
            *toolkits = Value::Array(Vec::new());
        }
        if let Value::Array(items) = toolkits {
            items.push(Value::String(tool_name.into()));
        }
        self
    }

    /// Attach an opaque field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    pub fn instructions(&self) -> Option<&str> {
        self.extra.get("instructions").and_then(Value::as_str)
    }

    /// Tool names referenced by `toolkits`.
    ///
    /// Entries may be plain names or objects with a `name` field; anything
    /// else is skipped.
    pub fn tool_names(&self) -> Vec<&str> {
        let Some(Value::Array(items)) = self.extra.get("toolkits") else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name.as_str()),
                Value::Object(tool) => tool.get("name").and_then(Value::as_str),
                _ => None,
            })
            .collect()
    }

    /// Reject agents that cannot be keyed
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::MissingAgentId);
        }
        Ok(())
    }
}
