//! Error types for registration and fixture validation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("agent has an empty `id`")]
    MissingAgentId,

    #[error("tool has an empty `name`")]
    MissingToolName,

    #[error("agent `{0}` is not registered")]
    UnknownAgent(String),

    #[error("tool `{0}` is not registered")]
    UnknownTool(String),

    #[error("invalid eval fixture `{name}`: {reason}")]
    InvalidFixture { name: String, reason: String },

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
