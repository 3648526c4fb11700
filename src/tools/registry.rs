//! Imperative tool lookup, independent of reducer-managed state

use std::collections::HashMap;

use super::Tool;

/// Registry for synchronous tool lookup by name
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Insert or replace the tool stored under `tool_id`
    pub fn register_tool(&mut self, tool_id: impl Into<String>, tool: Tool) {
        self.tools.insert(tool_id.into(), tool);
    }

    pub fn get_tool(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.get(tool_id)
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.tools.contains_key(tool_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_lookup() {
        let registry = ToolRegistry::new();
        assert!(registry.get_tool("geo").is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = ToolRegistry::new();
        registry.register_tool("geo", Tool::new("geo"));
        registry.register_tool("geo", Tool::new("geo").with_extra("v", 2));

        assert_eq!(registry.get_tool("geo"), Some(&Tool::new("geo").with_extra("v", 2)));
    }
}
