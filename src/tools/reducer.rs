//! Pure state transitions for the tool list

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Tool;
use crate::action::Action;

/// Tools known to the state container, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsState {
    pub tools: Vec<Tool>,
}

impl ToolsState {
    /// `{ tools: [] }`
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }
}

/// Apply `action` to `state`, matching existing tools by `name`.
///
/// Unhandled actions return the input `Arc` itself.
pub fn reduce(state: &Arc<ToolsState>, action: &Action) -> Arc<ToolsState> {
    match action {
        Action::RegisterTool { tool } => {
            let mut tools = state.tools.clone();
            match tools.iter_mut().find(|t| t.name == tool.name) {
                Some(existing) => *existing = tool.clone(),
                None => tools.push(tool.clone()),
            }
            Arc::new(ToolsState { tools })
        }
        Action::RegisterAgent { .. } | Action::SetActiveAgent { .. } | Action::Unknown { .. } => {
            Arc::clone(state)
        }
    }
}
