//! State container that routes actions through the agent and tool reducers.

use std::sync::Arc;

use crate::action::Action;
use crate::agents::{self, AgentsState};
use crate::tools::{self, ToolsState};

/// Holds the current reducer states.
///
/// Every dispatch goes to both reducers; each ignores actions it does not
/// handle. States are shared behind `Arc` so readers can keep a snapshot
/// while later dispatches produce new ones.
#[derive(Debug, Clone)]
pub struct Store {
    agents: Arc<AgentsState>,
    tools: Arc<ToolsState>,
    version: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            agents: Arc::new(AgentsState::initial()),
            tools: Arc::new(ToolsState::initial()),
            version: 0,
        }
    }

    /// Apply an action. Returns whether any state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let agents = agents::reduce(&self.agents, &action);
        let tools = tools::reduce(&self.tools, &action);

        let changed = !Arc::ptr_eq(&agents, &self.agents) || !Arc::ptr_eq(&tools, &self.tools);
        if changed {
            self.agents = agents;
            self.tools = tools;
            self.version += 1;
        }

        tracing::debug!(
            action = action.kind(),
            changed,
            version = self.version,
            "dispatched action"
        );
        changed
    }

    pub fn agents(&self) -> &Arc<AgentsState> {
        &self.agents
    }

    pub fn tools(&self) -> &Arc<ToolsState> {
        &self.tools
    }

    /// Number of dispatches that changed state
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
