//! Hook configuration.
//!
//! Read from `<cwd>/.claude/rolegate.toml` when present:
//!
//! ```toml
//! # Session table location, relative to <cwd>/.claude
//! state_file = "logs/active_agents.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rolegate_core::{Result, RoleGateError};
use serde::{Deserialize, Serialize};

use crate::paths::DEFAULT_STATE_FILE;

/// Settings shared by the tracker and the guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    /// Session table path, relative to the hook directory unless absolute.
    pub state_file: PathBuf,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl HookConfig {
    /// Reads the configuration file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(HookConfig))`: File present and valid
    /// - `Ok(None)`: File absent
    /// - `Err(RoleGateError)`: File unreadable or invalid
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let config: HookConfig = toml::from_str(&content)?;
        if config.state_file.as_os_str().is_empty() {
            return Err(RoleGateError::config("state_file must not be empty"));
        }
        if config.state_file.extension().is_some_and(|ext| ext == "lock") {
            return Err(RoleGateError::config(
                "state_file must not use the .lock extension reserved for its lock file",
            ));
        }
        Ok(Some(config))
    }

    /// Reads the configuration file, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(
                    "[Config] Ignoring invalid config {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
