//! Evaluation fixtures
//!
//! A fixture pins a conversation to an agent and lists the tools the agent
//! is expected to call. Fixtures are assembled with a fluent builder:
//!
//! ```
//! use agent_chat::EvalFixture;
//!
//! let fixture = EvalFixture::builder("oslo-weather")
//!     .agent("weather")
//!     .user("What's the weather in Oslo?")
//!     .expect_tool("geocode")
//!     .expect_tool("forecast")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fixture.expected_tools, vec!["geocode", "forecast"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::message::{Message, Role};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalFixture {
    pub name: String,
    pub agent_id: String,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub expected_tools: Vec<String>,
}

impl EvalFixture {
    pub fn builder(name: impl Into<String>) -> EvalFixtureBuilder {
        EvalFixtureBuilder::new(name)
    }

    /// Parse a fixture from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Verify the fixture's agent and expected tools are registered in `session`
    pub fn check(&self, session: &Session) -> Result<()> {
        if session.agent(&self.agent_id).is_none() {
            return Err(Error::UnknownAgent(self.agent_id.clone()));
        }
        for name in &self.expected_tools {
            if session.tool(name).is_none() {
                return Err(Error::UnknownTool(name.clone()));
            }
        }
        Ok(())
    }

    /// The last user message, which is the prompt under evaluation
    pub fn prompt(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
    }
}

/// Fluent builder for `EvalFixture`
#[derive(Debug, Clone)]
pub struct EvalFixtureBuilder {
    name: String,
    agent_id: Option<String>,
    messages: Vec<Message>,
    expected_tools: Vec<String>,
}

impl EvalFixtureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_id: None,
            messages: Vec::new(),
            expected_tools: Vec::new(),
        }
    }

    pub fn agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub fn user(self, text: impl Into<String>) -> Self {
        self.message(Message::user(text))
    }

    pub fn assistant(self, text: impl Into<String>) -> Self {
        self.message(Message::assistant(text))
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Expect a call to `tool_name`. Repeats are ignored.
    pub fn expect_tool(mut self, tool_name: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        if !self.expected_tools.contains(&tool_name) {
            self.expected_tools.push(tool_name);
        }
        self
    }

    pub fn build(self) -> Result<EvalFixture> {
        let invalid = |reason: &str| Error::InvalidFixture {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        let agent_id = match self.agent_id {
            Some(ref id) if !id.trim().is_empty() => id.clone(),
            _ => return Err(invalid("no agent")),
        };
        if self.messages.is_empty() {
            return Err(invalid("no messages"));
        }

        Ok(EvalFixture {
            name: self.name,
            agent_id,
            messages: self.messages,
            expected_tools: self.expected_tools,
        })
    }
}
