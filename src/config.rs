//! Executor configuration: goal and iteration budget, TOML-loadable.
//!
//! The goal and lifespan are supplied by the caller that instantiates the
//! executor; hosts that keep them in a config file can round-trip through
//! [`ExecutorConfig::load`] / [`ExecutorConfig::save`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::condition::Conditions;
use crate::error::{ConfigError, ConfigResult};

/// Caller-supplied executor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Target conditions the executor plans toward.
    pub goal: Conditions,
    /// Number of plan/execute iterations to run.
    pub lifespan: u32,
}

impl ExecutorConfig {
    /// Create a config from parts.
    pub fn new(goal: Conditions, lifespan: u32) -> Self {
        Self { goal, lifespan }
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
