use crate::discovery::SourceFilter;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape how script text is turned into records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Module prefix given to item ids that carry none.
    pub default_module: String,
    /// Replaces a lone wildcard item id once a consumed fluid is attached to it.
    pub wildcard_fluid_label: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_module: "Base".to_string(),
            wildcard_fluid_label: "Any fluid container".to_string(),
        }
    }
}

impl ParserConfig {
    /// Prefixes `id` with the default module unless it is already qualified.
    pub fn qualify(&self, id: &str) -> String {
        if id.contains('.') {
            id.to_string()
        } else {
            format!("{}.{}", self.default_module, id)
        }
    }

    /// The qualified wildcard id, e.g. `Base.*`.
    pub fn wildcard_item(&self) -> String {
        self.qualify("*")
    }
}

/// Top-level configuration file: parser settings plus source discovery rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KumitateConfig {
    pub parser: ParserConfig,
    pub sources: SourceFilter,
}

impl KumitateConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
