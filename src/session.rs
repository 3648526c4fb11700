//! Session-scoped container for registries and reducer state
//!
//! A `Session` is created when the host application starts a chat session
//! and dropped when it ends. Nothing here is global, so independent
//! sessions (and tests) never observe each other's registrations.

use crate::action::Action;
use crate::agents::{Agent, AgentRegistry};
use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::tools::{Tool, ToolRegistry};

#[derive(Debug, Clone, Default)]
pub struct Session {
    agent_registry: AgentRegistry,
    tool_registry: ToolRegistry,
    store: Store,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session preloaded with the configured agents and tools
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new();
        for tool in &config.tools {
            session.register_tool(tool.clone())?;
        }
        for agent in &config.agents {
            session.register_agent(agent.clone())?;
        }
        if let Some(ref agent_id) = config.general.active_agent {
            session.set_active_agent(agent_id.clone());
        }

        tracing::info!(
            agents = config.agents.len(),
            tools = config.tools.len(),
            "session initialized from config"
        );
        Ok(session)
    }

    /// Register an agent in both the registry and the reducer state
    pub fn register_agent(&mut self, agent: Agent) -> Result<()> {
        agent.validate()?;
        tracing::debug!(agent_id = %agent.id, "registering agent");
        self.agent_registry.register_agent(agent.id.clone(), agent.clone());
        self.store.dispatch(Action::RegisterAgent { agent });
        Ok(())
    }

    /// Register a tool in both the registry and the reducer state
    pub fn register_tool(&mut self, tool: Tool) -> Result<()> {
        tool.validate()?;
        tracing::debug!(tool = %tool.name, "registering tool");
        self.tool_registry.register_tool(tool.name.clone(), tool.clone());
        self.store.dispatch(Action::RegisterTool { tool });
        Ok(())
    }

    /// Select the active agent. The id may be registered later.
    pub fn set_active_agent(&mut self, agent_id: impl Into<String>) {
        let agent_id = agent_id.into();
        if !self.agent_registry.contains(&agent_id) {
            tracing::warn!(%agent_id, "active agent is not registered yet");
        }
        self.store.dispatch(Action::SetActiveAgent { agent_id });
    }

    /// Registry lookup by id
    pub fn agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agent_registry.get_agent(agent_id)
    }

    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tool_registry.get_tool(name)
    }

    /// The active agent, resolved against reducer state like
    /// `AgentsState::active_agent`. `None` while unset or dangling.
    pub fn active_agent(&self) -> Option<&Agent> {
        self.store.agents().active_agent()
    }

    /// Tools listed in the agent's toolkits that are registered.
    /// Unknown tool names are skipped.
    pub fn agent_tools(&self, agent: &Agent) -> Vec<&Tool> {
        agent
            .tool_names()
            .into_iter()
            .filter_map(|name| self.tool(name))
            .collect()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatch a raw action, e.g. one received from the host UI.
    ///
    /// Registrations are mirrored into the registries so lookups stay in
    /// step with reducer state. Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        match &action {
            Action::RegisterAgent { agent } => {
                agent.validate()?;
                self.agent_registry.register_agent(agent.id.clone(), agent.clone());
            }
            Action::RegisterTool { tool } => {
                tool.validate()?;
                self.tool_registry.register_tool(tool.name.clone(), tool.clone());
            }
            Action::SetActiveAgent { .. } | Action::Unknown { .. } => {}
        }
        Ok(self.store.dispatch(action))
    }
}
