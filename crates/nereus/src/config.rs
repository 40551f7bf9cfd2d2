//! Configuration for symbol requests.
//!
//! Settings reach Nereus either from a YAML file or from the host's JSON
//! settings object, where they live under `plugins.jedi_symbols`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ScopeMode;

/// Settings section holding symbol options in host settings.
pub const SETTINGS_SECTION: &str = "jedi_symbols";

/// Options recognized by symbol requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SymbolsConfig {
    /// List references in every lexical scope, not just module level
    #[serde(alias = "allScopes")]
    pub all_scopes: bool,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self { all_scopes: true }
    }
}

impl SymbolsConfig {
    /// Scope mode to request from the analysis engine.
    #[must_use]
    pub fn scope_mode(&self) -> ScopeMode {
        ScopeMode::from(self.all_scopes)
    }

    /// Parse configuration from YAML text.
    ///
    /// Empty text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed or has wrongly
    /// typed options.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save configuration to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails and [`Error::Io`]
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Read configuration from a host settings object.
    ///
    /// Looks for `plugins.jedi_symbols`; a missing section yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the section exists but is invalid.
    pub fn from_settings(settings: &serde_json::Value) -> Result<Self> {
        match settings.pointer(&format!("/plugins/{SETTINGS_SECTION}")) {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(section) => Self::deserialize(section).map_err(|e| {
                Error::Config(format!("invalid {SETTINGS_SECTION} settings: {e}"))
            }),
        }
    }
}
