//! Imperative agent lookup, independent of reducer-managed state

use std::collections::HashMap;

use super::Agent;

/// Registry for synchronous agent lookup by id.
///
/// Owned by a `Session`; there is no process-wide instance. Registration
/// overwrites silently and lookups of unknown ids return `None`.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Agent>,
}

impl AgentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    /// Insert or replace the agent stored under `agent_id`
    pub fn register_agent(&mut self, agent_id: impl Into<String>, agent: Agent) {
        self.agents.insert(agent_id.into(), agent);
    }

    pub fn get_agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.get(agent_id)
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.agents.contains_key(agent_id)
    }
}
