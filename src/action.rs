//! Actions dispatched to the agent and tool reducers
//!
//! On the wire an action is `{ "type": "...", "payload": { ... } }`:
//!
//! ```text
//! { "type": "REGISTER_AGENT",   "payload": { "agent": { "id": "a1" } } }
//! { "type": "SET_ACTIVE_AGENT", "payload": { "agentId": "a1" } }
//! { "type": "REGISTER_TOOL",    "payload": { "tool": { "name": "geo" } } }
//! ```
//!
//! Any other `type` becomes `Action::Unknown`, keeping its type string and
//! payload so it serializes back unchanged. Every reducer passes it through.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::agents::Agent;
use crate::tools::Tool;

pub const REGISTER_AGENT: &str = "REGISTER_AGENT";
pub const SET_ACTIVE_AGENT: &str = "SET_ACTIVE_AGENT";
pub const REGISTER_TOOL: &str = "REGISTER_TOOL";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add an agent, or replace the one with the same `id`
    RegisterAgent { agent: Agent },
    /// Select the active agent without checking that it exists
    SetActiveAgent { agent_id: String },
    /// Add a tool, or replace the one with the same `name`
    RegisterTool { tool: Tool },
    /// Any action type this crate does not handle
    Unknown { kind: String, payload: Value },
}

impl Action {
    /// An unhandled action without payload
    pub fn unknown(kind: impl Into<String>) -> Self {
        Action::Unknown {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    /// Wire name of this action
    pub fn kind(&self) -> &str {
        match self {
            Action::RegisterAgent { .. } => REGISTER_AGENT,
            Action::SetActiveAgent { .. } => SET_ACTIVE_AGENT,
            Action::RegisterTool { .. } => REGISTER_TOOL,
            Action::Unknown { kind, .. } => kind.as_str(),
        }
    }
}

/// `{ type, payload }` envelope shared by every action
#[derive(Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

#[derive(Serialize, Deserialize)]
struct AgentPayload {
    agent: Agent,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActiveAgentPayload {
    agent_id: String,
}

#[derive(Serialize, Deserialize)]
struct ToolPayload {
    tool: Tool,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;
        let action = match kind.as_str() {
            REGISTER_AGENT => {
                let AgentPayload { agent } =
                    serde_json::from_value(payload).map_err(D::Error::custom)?;
                Action::RegisterAgent { agent }
            }
            SET_ACTIVE_AGENT => {
                let ActiveAgentPayload { agent_id } =
                    serde_json::from_value(payload).map_err(D::Error::custom)?;
                Action::SetActiveAgent { agent_id }
            }
            REGISTER_TOOL => {
                let ToolPayload { tool } =
                    serde_json::from_value(payload).map_err(D::Error::custom)?;
                Action::RegisterTool { tool }
            }
            _ => Action::Unknown { kind, payload },
        };
        Ok(action)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = match self {
            Action::RegisterAgent { agent } => serde_json::to_value(AgentPayload {
                agent: agent.clone(),
            }),
            Action::SetActiveAgent { agent_id } => serde_json::to_value(ActiveAgentPayload {
                agent_id: agent_id.clone(),
            }),
            Action::RegisterTool { tool } => serde_json::to_value(ToolPayload { tool: tool.clone() }),
            Action::Unknown { payload, .. } => Ok(payload.clone()),
        }
        .map_err(S::Error::custom)?;

        Envelope {
            kind: self.kind().to_string(),
            payload,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_register_agent() {
        let action: Action = serde_json::from_value(json!({
            "type": "REGISTER_AGENT",
            "payload": { "agent": { "id": "a1", "extra": "v2" } }
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::RegisterAgent {
                agent: Agent::new("a1").with_extra("extra", "v2"),
            }
        );
    }

    #[test]
    fn test_parse_set_active_agent() {
        let action: Action = serde_json::from_value(json!({
            "type": "SET_ACTIVE_AGENT",
            "payload": { "agentId": "a2" }
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::SetActiveAgent {
                agent_id: "a2".to_string(),
            }
        );
        assert_eq!(action.kind(), "SET_ACTIVE_AGENT");
    }

    #[test]
    fn test_serialize_register_tool() {
        let action = Action::RegisterTool {
            tool: Tool::new("geo"),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "REGISTER_TOOL", "payload": { "tool": { "name": "geo" } } })
        );
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        let action: Action = serde_json::from_value(json!({ "type": "CLEAR_HISTORY" })).unwrap();
        assert_eq!(action, Action::unknown("CLEAR_HISTORY"));
    }

    #[test]
    fn test_unrecognized_type_with_payload() {
        let action: Action = serde_json::from_value(json!({
            "type": "CLEAR_HISTORY",
            "payload": { "threadId": "t1" }
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::Unknown {
                kind: "CLEAR_HISTORY".to_string(),
                payload: json!({ "threadId": "t1" }),
            }
        );
        assert_eq!(action.kind(), "CLEAR_HISTORY");
    }

    #[test]
    fn test_unknown_action_serializes_unchanged() {
        let wire = json!({ "type": "APPEND_MESSAGE", "payload": { "text": "hi", "n": [1, 2] } });
        let action: Action = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&action).unwrap(), wire);

        let bare = json!({ "type": "RESET" });
        let action: Action = serde_json::from_value(bare.clone()).unwrap();
        assert_eq!(serde_json::to_value(&action).unwrap(), bare);
    }

    #[test]
    fn test_known_type_with_bad_payload_is_rejected() {
        let result = serde_json::from_value::<Action>(json!({
            "type": "SET_ACTIVE_AGENT",
            "payload": { "id": "a1" }
        }));
        assert!(result.is_err());
    }
}
