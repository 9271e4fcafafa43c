//! Path management for hook state and configuration.
//!
//! Everything lives under the `.claude` directory of the working directory
//! reported by the host:
//!
//! ```text
//! <cwd>/.claude/
//! ├── rolegate.toml              # Optional hook configuration
//! └── logs/
//!     ├── active_agents.json     # Session table
//!     └── active_agents.lock     # Writer lock
//! ```

use std::path::PathBuf;

use rolegate_core::hook::hook_dir;

use crate::config::HookConfig;

/// Name of the optional configuration file inside the hook directory.
pub const CONFIG_FILE_NAME: &str = "rolegate.toml";

/// Default session table location, relative to the hook directory.
pub const DEFAULT_STATE_FILE: &str = "logs/active_agents.json";

/// Resolves rolegate file locations for one working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGatePaths {
    hook_dir: PathBuf,
}

impl RoleGatePaths {
    /// Paths rooted at `<cwd>/.claude`.
    pub fn for_cwd(cwd: &str) -> Self {
        Self {
            hook_dir: hook_dir(cwd),
        }
    }

    /// Returns the path to the hook configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.hook_dir.join(CONFIG_FILE_NAME)
    }

    /// Returns the session table path for `config`.
    ///
    /// Absolute `state_file` values are used as given.
    pub fn state_file(&self, config: &HookConfig) -> PathBuf {
        self.hook_dir.join(&config.state_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let paths = RoleGatePaths::for_cwd("/tmp/proj");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/proj/.claude/rolegate.toml"));
        assert_eq!(
            paths.state_file(&HookConfig::default()),
            PathBuf::from("/tmp/proj/.claude/logs/active_agents.json")
        );
    }

    #[test]
    fn test_empty_cwd_is_relative() {
        let paths = RoleGatePaths::for_cwd("");
        assert_eq!(
            paths.state_file(&HookConfig::default()),
            PathBuf::from(".claude/logs/active_agents.json")
        );
    }

    #[test]
    fn test_absolute_state_file_override() {
        let paths = RoleGatePaths::for_cwd("/tmp/proj");
        let config = HookConfig {
            state_file: PathBuf::from("/var/lib/rolegate/table.json"),
        };
        assert_eq!(
            paths.state_file(&config),
            PathBuf::from("/var/lib/rolegate/table.json")
        );
    }
}
