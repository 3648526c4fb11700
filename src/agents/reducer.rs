//! Pure state transitions for the agent list and the active agent

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Agent;
use crate::action::Action;

/// Agents known to the state container, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsState {
    /// Not checked against `agents`; may name an agent registered later
    pub active_agent_id: Option<String>,
    pub agents: Vec<Agent>,
}

impl AgentsState {
    /// `{ activeAgentId: null, agents: [] }`
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn get(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    /// Resolve `active_agent_id`. Returns `None` when unset or dangling.
    pub fn active_agent(&self) -> Option<&Agent> {
        self.active_agent_id.as_deref().and_then(|id| self.get(id))
    }
}

/// Apply `action` to `state`.
///
/// Actions this reducer does not handle return the input `Arc` itself, so
/// callers can detect no-ops with `Arc::ptr_eq`.
pub fn reduce(state: &Arc<AgentsState>, action: &Action) -> Arc<AgentsState> {
    match action {
        Action::RegisterAgent { agent } => {
            let mut agents = state.agents.clone();
            match agents.iter_mut().find(|a| a.id == agent.id) {
                Some(existing) => *existing = agent.clone(),
                None => agents.push(agent.clone()),
            }
            Arc::new(AgentsState {
                active_agent_id: state.active_agent_id.clone(),
                agents,
            })
        }
        Action::SetActiveAgent { agent_id } => Arc::new(AgentsState {
            active_agent_id: Some(agent_id.clone()),
            agents: state.agents.clone(),
        }),
        Action::RegisterTool { .. } | Action::Unknown { .. } => Arc::clone(state),
    }
}
