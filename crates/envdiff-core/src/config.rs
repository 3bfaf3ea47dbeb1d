//! Configuration file parsing
//!
//! An optional `envdiff.toml` chooses the separators used to read dumps:
//!
//! ```toml
//! [parse]
//! path_list_separator = ";"
//! record_separator = "nul"
//! ```
//!
//! Missing keys fall back to the platform defaults.

use crate::errors::{EnvDiffError, Result};
use crate::parser::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvDiffConfig {
    /// How dumps are split into records and segments
    pub parse: ParseOptions,
}

impl EnvDiffConfig {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - `ConfigParse` if the text is not valid TOML for this schema (a
    ///   multi-character separator is rejected here)
    /// - `InvalidSeparator` if the separator collides with record splitting
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EnvDiffConfig =
            toml::from_str(text).map_err(|e| EnvDiffError::ConfigParse {
                message: e.to_string(),
            })?;
        config.parse.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// `ReadInput` if the file cannot be read, otherwise as
    /// [`EnvDiffConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EnvDiffError::ReadInput {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// `Serialization` if TOML encoding fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EnvDiffError::Serialization {
            message: e.to_string(),
        })
    }
}
