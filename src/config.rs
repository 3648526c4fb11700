//! Configuration loading and validation
//!
//! A config file declares the agents and tools a session starts with:
//!
//! ```toml
//! [general]
//! active_agent = "weather"
//!
//! [logging]
//! level = "debug"
//!
//! [[agents]]
//! id = "weather"
//! instructions = "Answer questions about the weather."
//! toolkits = ["geocode"]
//!
//! [[tools]]
//! name = "geocode"
//! description = "Resolve a place name to coordinates"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::tools::Tool;

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub agents: Vec<Agent>,
    pub tools: Vec<Tool>,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::from_path(&path);
            }
        }
        Ok(Config::default())
    }

    /// Load and validate configuration from an explicit file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the config directory path (~/.config/agent-chat)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("agent-chat"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Check ids, names, and the configured active agent
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for agent in &self.agents {
            agent.validate()?;
            if !ids.insert(agent.id.as_str()) {
                bail!("Duplicate agent id: {}", agent.id);
            }
        }

        let mut names = HashSet::new();
        for tool in &self.tools {
            tool.validate()?;
            if !names.insert(tool.name.as_str()) {
                bail!("Duplicate tool name: {}", tool.name);
            }
        }

        if let Some(ref active) = self.general.active_agent {
            if !ids.contains(active.as_str()) {
                bail!("active_agent `{}` is not a configured agent", active);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Agent selected when the session starts
    pub active_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.agents.is_empty());
        assert!(config.tools.is_empty());
        assert_eq!(config.general.active_agent, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[general]
active_agent = "weather"

[logging]
level = "debug"

[[agents]]
id = "weather"
instructions = "Answer questions about the weather."
toolkits = ["geocode"]
temperature = 0.5

[[agents]]
id = "chat"

[[tools]]
name = "geocode"
description = "Resolve a place name to coordinates"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.active_agent.as_deref(), Some("weather"));
        assert_eq!(config.logging.level, "debug");

        let ids: Vec<_> = config.agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["weather", "chat"]);
        assert_eq!(config.agents[0].tool_names(), vec!["geocode"]);
        assert_eq!(config.agents[0].extra["temperature"], 0.5);
        assert_eq!(config.tools[0].name, "geocode");
    }

    #[test]
    fn test_duplicate_agent_id_rejected() {
        let toml = r#"
[[agents]]
id = "a1"

[[agents]]
id = "a1"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate agent id"));
    }

    #[test]
    fn test_duplicate_tool_name_rejected() {
        let toml = r#"
[[tools]]
name = "geo"

[[tools]]
name = "geo"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_active_agent_rejected() {
        let toml = r#"
[general]
active_agent = "missing"

[[agents]]
id = "a1"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[tools]]\nname = \"geo\"").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.tools, vec![Tool::new("geo")]);
    }

    #[test]
    fn test_from_path_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[agents]]\nname = \"no id\"").unwrap();

        let err = Config::from_path(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
