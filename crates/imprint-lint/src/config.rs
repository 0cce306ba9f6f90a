//! Configuration for imprint-lint
//!
//! Decides which commands declare identifiers, which namespace each of them
//! declares into, and how severe a duplicate is.

use serde::{Deserialize, Serialize};

use crate::declaration::Namespace;
use crate::emitter::Severity;

/// Duplicate identifier inspection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Commands whose first required argument declares a label
    pub label_commands: Vec<String>,
    /// Commands whose first required argument declares a bibliography item.
    /// These share their namespace with `.bib` entry keys.
    pub bibitem_commands: Vec<String>,
    /// Severity attached to every duplicate
    pub severity: Severity,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            label_commands: vec!["\\label".to_string()],
            bibitem_commands: vec!["\\bibitem".to_string()],
            severity: Severity::Error,
        }
    }
}

impl LintConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate command names
    pub fn validate(&self) -> Result<(), ConfigError> {
        for command in self.label_commands.iter().chain(&self.bibitem_commands) {
            if command.is_empty() {
                return Err(ConfigError::EmptyCommand);
            }
            if !command.starts_with('\\') {
                return Err(ConfigError::MissingBackslash(command.clone()));
            }
        }

        if let Some(command) = self
            .label_commands
            .iter()
            .find(|c| self.bibitem_commands.contains(c))
        {
            return Err(ConfigError::ConflictingCommand(command.clone()));
        }

        Ok(())
    }

    /// The namespace a command declares into, if it declares anything
    pub fn namespace_of(&self, command: &str) -> Option<Namespace> {
        if self.label_commands.iter().any(|c| c == command) {
            Some(Namespace::Label)
        } else if self.bibitem_commands.iter().any(|c| c == command) {
            Some(Namespace::Bibitem)
        } else {
            None
        }
    }
}

/// Configuration loading or validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command names must not be empty")]
    EmptyCommand,

    #[error("Command name must start with a backslash: {0}")]
    MissingBackslash(String),

    #[error("Command declares into both namespaces: {0}")]
    ConflictingCommand(String),
}
