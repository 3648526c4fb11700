//! Agent Chat - agent and tool registries for chat applications
//!
//! The crate keeps two kinds of state side by side:
//!
//! - **Registries** (`AgentRegistry`, `ToolRegistry`) for synchronous,
//!   imperative lookup by key.
//! - **Reducers** (`agents::reduce`, `tools::reduce`) that fold `Action`s
//!   into immutable `AgentsState` / `ToolsState` snapshots inside a `Store`.
//!
//! A `Session` owns one of each and keeps them in step.
//!
//! # Example
//!
//! ```
//! use agent_chat::{Agent, Session, Tool};
//!
//! let mut session = Session::new();
//! session.register_tool(Tool::new("geocode")).unwrap();
//! session
//!     .register_agent(Agent::new("weather").with_toolkit("geocode"))
//!     .unwrap();
//! session.set_active_agent("weather");
//!
//! let active = session.active_agent().unwrap();
//! assert_eq!(active.id, "weather");
//! assert_eq!(session.agent_tools(active).len(), 1);
//! ```

mod action;
pub mod agents;
mod config;
mod error;
mod evals;
mod message;
mod session;
mod store;
pub mod tools;

// Re-export the public API
pub use action::Action;
pub use agents::{Agent, AgentRegistry, AgentsState};
pub use config::{Config, GeneralConfig, LoggingConfig};
pub use error::{Error, Result};
pub use evals::{EvalFixture, EvalFixtureBuilder};
pub use message::{InvocationState, Message, Part, Role, ToolInvocation};
pub use session::Session;
pub use store::Store;
pub use tools::{Tool, ToolRegistry, ToolsState};
