//! Agent configuration record.
//!
//! The lifecycle controller treats this record as already validated: by the
//! time an [`AgentConfig`] reaches it, `load` has guaranteed that every
//! required field is present and non-empty, or the process has exited with
//! code 2. Controllers never re-validate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or persisting the configuration file.
///
/// All variants are fatal before the lifecycle controller starts; the
/// process maps them to exit code 2.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {path} is missing required field '{field}'")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("cannot write config file {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The agent configuration, as stored in the JSON config file.
///
/// `source` is the resolved path the record was loaded from; it is not part
/// of the file itself but is needed downstream for the PID-file fallback
/// rule (see [`crate::paths::resolve_pid_path`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Account the host reports under.
    pub account: String,
    /// API token used by the monitoring engine.
    pub access_token: String,
    /// Service names the engine watches on this host. Must be non-empty.
    #[serde(default)]
    pub services: Vec<String>,
    /// Deployment stack this host belongs to.
    pub stack: String,
    /// Optional override for the PID file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<PathBuf>,
    /// Resolved path this record was loaded from.
    #[serde(skip)]
    pub source: PathBuf,
}

/// Values from the command line that take precedence over the file.
///
/// Consumed entirely by the loader; the lifecycle controller never sees
/// which fields came from where.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub account: Option<String>,
    pub access_token: Option<String>,
}

impl AgentConfig {
    /// Load the config file at `path`, apply `overrides`, and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// required field ends up empty after the merge.
    pub fn load(path: &Path, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        config.source = path.to_path_buf();
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Persist the record back to the file it was loaded from.
    ///
    /// Used by `--update` after command-line values have been merged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn persist(&self) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| ConfigError::Invalid {
                path: self.source.clone(),
                source,
            })?;
        std::fs::write(&self.source, content).map_err(|source| ConfigError::Unwritable {
            path: self.source.clone(),
            source,
        })
    }

    fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(account) = &overrides.account {
            self.account.clone_from(account);
        }
        if let Some(token) = &overrides.access_token {
            self.access_token.clone_from(token);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let missing = |field| ConfigError::MissingField {
            path: self.source.clone(),
            field,
        };
        if self.account.trim().is_empty() {
            return Err(missing("account"));
        }
        if self.access_token.trim().is_empty() {
            return Err(missing("access_token"));
        }
        if self.services.is_empty() {
            return Err(missing("services"));
        }
        if self.stack.trim().is_empty() {
            return Err(missing("stack"));
        }
        Ok(())
    }
}
